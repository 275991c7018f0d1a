use egui::{Pos2, Rect, vec2};

use super::common::{self, Style};

/// Freeform text element.
///
/// The engine only stores content and font size; shaping and in-place editing
/// belong to the rendering substrate.
#[derive(Debug, Clone, PartialEq)]
pub struct TextObject {
    id: usize,
    content: String,
    font_size: f32,
    position: Pos2,
    style: Style,
}

impl TextObject {
    /// Create the placeholder text at the factory defaults.
    pub(crate) fn with_defaults(id: usize) -> Self {
        Self {
            id,
            content: common::DEFAULT_TEXT_CONTENT.to_owned(),
            font_size: common::DEFAULT_FONT_SIZE,
            position: common::DEFAULT_TEXT_POSITION,
            style: Style::text_default(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub(crate) fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Approximate extent; exact metrics require font shaping.
    pub fn rect(&self) -> Rect {
        let width = self.content.chars().count() as f32 * self.font_size * 0.6;
        Rect::from_min_size(self.position, vec2(width, self.font_size * 1.2))
    }
}
