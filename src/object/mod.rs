use egui::{Pos2, Rect};

mod common;
pub(crate) mod image;
pub(crate) mod shape;
pub(crate) mod text;

pub use common::Style;
pub use image::ImageObject;
pub use shape::{ShapeGeometry, ShapeKind, ShapeObject};
pub use text::TextObject;

/// Stable identifier for a drawable object within a session.
pub type ObjectId = usize;

/// Tagged variant over every drawable in the scene graph.
///
/// Exactly one `Image` exists per session (the background); everything else
/// is user-created and selectable.
#[derive(Debug, Clone)]
pub enum Object {
    Image(ImageObject),
    Text(TextObject),
    Shape(ShapeObject),
}

impl Object {
    pub fn id(&self) -> ObjectId {
        match self {
            Object::Image(i) => i.id(),
            Object::Text(t) => t.id(),
            Object::Shape(s) => s.id(),
        }
    }

    /// The leaf kind name, as shown in log entries.
    pub fn object_type(&self) -> &'static str {
        match self {
            Object::Image(_) => "image",
            Object::Text(_) => "text",
            Object::Shape(s) => s.kind().as_str(),
        }
    }

    /// Bounding rectangle in frame coordinates (top-left origin).
    pub fn rect(&self) -> Rect {
        match self {
            Object::Image(i) => i.rect(),
            Object::Text(t) => t.rect(),
            Object::Shape(s) => s.rect(),
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            Object::Image(i) => i.position(),
            Object::Text(t) => t.position(),
            Object::Shape(s) => s.position(),
        }
    }

    /// Whether the host may report this object as the pointer selection.
    /// The background image is never selectable.
    pub fn selectable(&self) -> bool {
        !matches!(self, Object::Image(_))
    }

    /// Paint style, if the object carries one (the background does not).
    pub fn style(&self) -> Option<&Style> {
        match self {
            Object::Image(_) => None,
            Object::Text(t) => Some(t.style()),
            Object::Shape(s) => Some(s.style()),
        }
    }

    pub(crate) fn style_mut(&mut self) -> Option<&mut Style> {
        match self {
            Object::Image(_) => None,
            Object::Text(t) => Some(t.style_mut()),
            Object::Shape(s) => Some(s.style_mut()),
        }
    }
}

/// Factory functions for creating objects at their default placement
pub mod factory {
    use super::*;

    /// Create the placeholder text object
    pub fn create_text(id: ObjectId) -> Object {
        Object::Text(TextObject::with_defaults(id))
    }

    /// Create a shape of the given kind at its default placement and style
    pub fn create_shape(id: ObjectId, kind: ShapeKind) -> Object {
        Object::Shape(ShapeObject::with_defaults(id, kind))
    }
}
