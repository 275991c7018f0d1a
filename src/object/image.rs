use egui::{Pos2, Rect, vec2};
use tiny_skia::{ColorU8, IntSize, Pixmap};

use crate::loader::{DecodedImage, LoadError};

/// Background image element.
///
/// Always painted first, never selectable. Owns the decoded pixels as a
/// premultiplied pixmap ready for compositing; the pixmap is the session's
/// rendering surface and is released with the object.
#[derive(Clone)]
pub struct ImageObject {
    id: usize,
    pixmap: Pixmap,
    position: Pos2,
    scale: f32,
}

// Pixmap carries the full pixel buffer, keep Debug output small
impl std::fmt::Debug for ImageObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageObject")
            .field("id", &self.id)
            .field("natural_width", &self.pixmap.width())
            .field("natural_height", &self.pixmap.height())
            .field("scale", &self.scale)
            .finish()
    }
}

impl ImageObject {
    /// Build the background object from decoded pixels and a cover-fit scale.
    pub(crate) fn from_decoded(
        id: usize,
        decoded: DecodedImage,
        scale: f32,
    ) -> Result<Self, LoadError> {
        let DecodedImage {
            width,
            height,
            mut pixels,
        } = decoded;

        // tiny-skia wants premultiplied RGBA
        for px in pixels.chunks_exact_mut(4) {
            let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
            px[0] = c.red();
            px[1] = c.green();
            px[2] = c.blue();
            px[3] = c.alpha();
        }

        let size =
            IntSize::from_wh(width, height).ok_or(LoadError::InvalidDimensions(width, height))?;
        let pixmap =
            Pixmap::from_vec(pixels, size).ok_or(LoadError::InvalidDimensions(width, height))?;

        Ok(Self {
            id,
            pixmap,
            position: Pos2::ZERO,
            scale,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn natural_width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn natural_height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Uniform cover-fit scale applied at paint time.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Drawn extent after scaling; overflow past the frame is clipped there.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(
            self.position,
            vec2(
                self.pixmap.width() as f32 * self.scale,
                self.pixmap.height() as f32 * self.scale,
            ),
        )
    }
}
