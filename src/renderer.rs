//! Deterministic raster export: composite the scene graph, bottom to top,
//! into a PNG buffer at the frame's pixel dimensions.
//!
//! The background pixels are blitted directly with their cover-fit scale; the
//! vector objects are serialized to an SVG overlay and rasterized on top with
//! resvg, which also gives text shaping via the system font database.

use std::fmt::Write as _;

use thiserror::Error;
use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::object::{Object, ShapeGeometry, Style};
use crate::scene::SceneGraph;
use crate::util::color;

/// Suggested download name for exported buffers.
pub const EXPORT_FILE_NAME: &str = "canvas.png";

/// Errors from rasterizing the scene.
///
/// Distinct from [`crate::loader::LoadError`]: an export failure means the
/// composed output could not be produced, not that the scene is corrupt.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("frame dimensions {0}x{1} are not renderable")]
    InvalidFrame(u32, u32),
    #[error("vector overlay failed to parse: {0}")]
    Svg(#[from] usvg::Error),
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// Render the full scene in paint order and encode it as PNG at full quality.
/// Never mutates the scene; byte-identical for an unchanged scene and frame.
pub fn render_png(
    scene: &SceneGraph,
    frame_width: u32,
    frame_height: u32,
) -> Result<Vec<u8>, ExportError> {
    let mut pixmap = Pixmap::new(frame_width, frame_height)
        .ok_or(ExportError::InvalidFrame(frame_width, frame_height))?;

    if let Some(background) = scene.background() {
        pixmap.draw_pixmap(
            0,
            0,
            background.pixmap().as_ref(),
            &PixmapPaint::default(),
            Transform::from_scale(background.scale(), background.scale()),
            None,
        );
    }

    if let Some(svg) = build_overlay_svg(scene, frame_width, frame_height) {
        let mut options = usvg::Options::default();
        // Text shaping wants real fonts; without any, text objects simply
        // drop out of the raster.
        options.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(&svg, &options)?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    }

    pixmap
        .encode_png()
        .map_err(|e| ExportError::Encode(e.to_string()))
}

/// Serialize the vector objects (everything above the background) to an SVG
/// document, preserving paint order. Returns None when there is nothing to
/// overlay.
fn build_overlay_svg(scene: &SceneGraph, frame_width: u32, frame_height: u32) -> Option<String> {
    let mut body = String::new();

    for object in scene.objects() {
        match object {
            Object::Image(_) => {} // blitted directly
            Object::Text(text) => {
                let pos = text.position();
                let _ = writeln!(
                    body,
                    "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{}\" font-family=\"sans-serif\" dominant-baseline=\"text-before-edge\"{}>{}</text>",
                    pos.x,
                    pos.y,
                    text.font_size(),
                    style_attrs(text.style()),
                    escape_xml(text.content()),
                );
            }
            Object::Shape(shape) => {
                let pos = shape.position();
                let attrs = style_attrs(shape.style());
                match shape.geometry() {
                    ShapeGeometry::Circle { radius } => {
                        let _ = writeln!(
                            body,
                            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"{}/>",
                            pos.x + radius,
                            pos.y + radius,
                            radius,
                            attrs,
                        );
                    }
                    ShapeGeometry::Rectangle { width, height } => {
                        let _ = writeln!(
                            body,
                            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\"{}/>",
                            pos.x, pos.y, width, height, attrs,
                        );
                    }
                    ShapeGeometry::Triangle { width, height } => {
                        // Isosceles: apex top-center, base along the bottom
                        let _ = writeln!(
                            body,
                            "  <polygon points=\"{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\"{}/>",
                            pos.x + width / 2.0,
                            pos.y,
                            pos.x,
                            pos.y + height,
                            pos.x + width,
                            pos.y + height,
                            attrs,
                        );
                    }
                    ShapeGeometry::Polygon { points } => {
                        let mut list = String::new();
                        for p in points {
                            let _ = write!(list, "{:.1},{:.1} ", pos.x + p.x, pos.y + p.y);
                        }
                        let _ = writeln!(body, "  <polygon points=\"{}\"{}/>", list.trim_end(), attrs);
                    }
                }
            }
        }
    }

    if body.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = frame_width,
        h = frame_height,
    );
    out.push_str(&body);
    let _ = writeln!(out, "</svg>");
    Some(out)
}

fn style_attrs(style: &Style) -> String {
    let mut attrs = String::new();

    let [_, _, _, fill_alpha] = color::unmultiplied(style.fill);
    if fill_alpha == 0 {
        attrs.push_str(" fill=\"none\"");
    } else {
        let _ = write!(attrs, " fill=\"{}\"", color::css_rgb(style.fill));
        if fill_alpha < 255 {
            let _ = write!(attrs, " fill-opacity=\"{:.3}\"", fill_alpha as f32 / 255.0);
        }
    }

    let [_, _, _, stroke_alpha] = color::unmultiplied(style.stroke);
    if stroke_alpha > 0 && style.stroke_width > 0.0 {
        let _ = write!(
            attrs,
            " stroke=\"{}\" stroke-width=\"{}\"",
            color::css_rgb(style.stroke),
            style.stroke_width,
        );
        if stroke_alpha < 255 {
            let _ = write!(
                attrs,
                " stroke-opacity=\"{:.3}\"",
                stroke_alpha as f32 / 255.0
            );
        }
    }

    attrs
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;
    use crate::object::{ShapeKind, factory};

    #[test]
    fn test_empty_scene_has_no_overlay() {
        let scene = SceneGraph::new();
        assert!(build_overlay_svg(&scene, 800, 600).is_none());
    }

    #[test]
    fn test_overlay_preserves_paint_order() {
        let mut scene = SceneGraph::new();
        scene.add(factory::create_shape(generate_id(), ShapeKind::Circle));
        scene.add(factory::create_shape(generate_id(), ShapeKind::Rectangle));

        let svg = build_overlay_svg(&scene, 800, 600).unwrap();
        let circle_at = svg.find("<circle").unwrap();
        let rect_at = svg.find("<rect").unwrap();
        assert!(circle_at < rect_at);
    }

    #[test]
    fn test_text_content_is_escaped() {
        let mut scene = SceneGraph::new();
        scene.add(factory::create_text(generate_id()));
        let svg = build_overlay_svg(&scene, 800, 600).unwrap();
        assert!(svg.contains(">Edit me</text>"));
        assert_eq!(escape_xml("a<b&c"), "a&lt;b&amp;c");
    }

    #[test]
    fn test_transparent_fill_serializes_as_none() {
        let style = Style::shape_default();
        let attrs = style_attrs(&style);
        assert!(attrs.contains("fill=\"none\""));
        assert!(attrs.contains("stroke=\"#0000ff\""));
        assert!(attrs.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_zero_frame_is_an_export_error() {
        let scene = SceneGraph::new();
        let err = render_png(&scene, 0, 600).unwrap_err();
        assert!(matches!(err, ExportError::InvalidFrame(0, 600)));
    }
}
