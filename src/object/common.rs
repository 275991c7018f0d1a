use egui::{Color32, Pos2, Rect};

// Factory defaults shared by the object constructors
pub const DEFAULT_TEXT_POSITION: Pos2 = Pos2::new(100.0, 100.0);
pub const DEFAULT_TEXT_CONTENT: &str = "Edit me";
pub const DEFAULT_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_SHAPE_POSITION: Pos2 = Pos2::new(150.0, 150.0);
pub const DEFAULT_POLYGON_POSITION: Pos2 = Pos2::new(100.0, 100.0);
pub const DEFAULT_SHAPE_SIZE: f32 = 100.0;
pub const DEFAULT_CIRCLE_RADIUS: f32 = 50.0;

/// Paint attributes shared by every user-created object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl Style {
    /// Default shape style: no fill, blue outline.
    pub fn shape_default() -> Self {
        Self {
            fill: Color32::TRANSPARENT,
            stroke: Color32::BLUE,
            stroke_width: 2.0,
        }
    }

    /// Default text style: solid black, no outline.
    pub fn text_default() -> Self {
        Self {
            fill: Color32::BLACK,
            stroke: Color32::TRANSPARENT,
            stroke_width: 0.0,
        }
    }
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
}
