use egui::Color32;

/// Straight (unmultiplied) RGBA components of a color.
///
/// `Color32` stores premultiplied alpha, which is the wrong form for CSS/SVG
/// attributes and for log entries, so undo the multiplication here.
pub fn unmultiplied(color: Color32) -> [u8; 4] {
    let [r, g, b, a] = color.to_array();
    match a {
        0 => [0, 0, 0, 0],
        255 => [r, g, b, 255],
        _ => {
            let un = |v: u8| ((v as u16 * 255 + a as u16 / 2) / a as u16).min(255) as u8;
            [un(r), un(g), un(b), a]
        }
    }
}

/// Format a color as a CSS hex string: `#rrggbb`, or `#rrggbbaa` when the
/// color is not fully opaque.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, a] = unmultiplied(color);
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// The opaque `#rrggbb` part only, alpha dropped.
pub fn css_rgb(color: Color32) -> String {
    let [r, g, b, _] = unmultiplied(color);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(to_hex(Color32::from_rgb(255, 0, 0)), "#ff0000");
        assert_eq!(parse_hex("#ff0000"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_hex("00ff00"), Some(Color32::from_rgb(0, 255, 0)));
    }

    #[test]
    fn test_transparent() {
        assert_eq!(to_hex(Color32::TRANSPARENT), "#00000000");
        assert_eq!(unmultiplied(Color32::TRANSPARENT)[3], 0);
    }

    #[test]
    fn test_semi_transparent_unmultiplies() {
        let c = Color32::from_rgba_unmultiplied(0, 0, 255, 128);
        let [_, _, b, a] = unmultiplied(c);
        assert_eq!(a, 128);
        // Premultiply then unmultiply loses at most a rounding step.
        assert!(b >= 253);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_hex("#f00"), None);
        assert_eq!(parse_hex("not a color"), None);
    }
}
