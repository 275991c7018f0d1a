use std::str::FromStr;

use egui::{Pos2, Rect, Vec2, vec2};
use serde::{Deserialize, Serialize};

use super::common::{self, Style};

/// The shape kinds the factory accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
    Polygon,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "triangle" => Ok(ShapeKind::Triangle),
            "polygon" => Ok(ShapeKind::Polygon),
            other => Err(format!("unknown shape kind: {other}")),
        }
    }
}

/// Geometry payload per shape kind.
///
/// Polygon points are relative to the object position; the default outline is
/// a five-point star but any ordered sequence is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
    Triangle { width: f32, height: f32 },
    Polygon { points: Vec<Pos2> },
}

/// Vector shape element (circle, rectangle, triangle or polygon).
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeObject {
    id: usize,
    geometry: ShapeGeometry,
    position: Pos2,
    style: Style,
}

impl ShapeObject {
    /// Create a shape of the given kind at the factory defaults.
    pub(crate) fn with_defaults(id: usize, kind: ShapeKind) -> Self {
        let size = common::DEFAULT_SHAPE_SIZE;
        let (position, geometry) = match kind {
            ShapeKind::Circle => (
                common::DEFAULT_SHAPE_POSITION,
                ShapeGeometry::Circle {
                    radius: common::DEFAULT_CIRCLE_RADIUS,
                },
            ),
            ShapeKind::Rectangle => (
                common::DEFAULT_SHAPE_POSITION,
                ShapeGeometry::Rectangle {
                    width: size,
                    height: size,
                },
            ),
            ShapeKind::Triangle => (
                common::DEFAULT_SHAPE_POSITION,
                ShapeGeometry::Triangle {
                    width: size,
                    height: size,
                },
            ),
            ShapeKind::Polygon => (
                common::DEFAULT_POLYGON_POSITION,
                ShapeGeometry::Polygon {
                    points: default_star_points(),
                },
            ),
        };
        Self {
            id,
            geometry,
            position,
            style: Style::shape_default(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            ShapeGeometry::Circle { .. } => ShapeKind::Circle,
            ShapeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeGeometry::Triangle { .. } => ShapeKind::Triangle,
            ShapeGeometry::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
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

    pub fn rect(&self) -> Rect {
        let size = match &self.geometry {
            ShapeGeometry::Circle { radius } => vec2(radius * 2.0, radius * 2.0),
            ShapeGeometry::Rectangle { width, height }
            | ShapeGeometry::Triangle { width, height } => vec2(*width, *height),
            ShapeGeometry::Polygon { points } => {
                let bounds = common::calculate_bounds(points);
                return bounds.translate(Vec2::new(self.position.x, self.position.y));
            }
        };
        Rect::from_min_size(self.position, size)
    }
}

/// Five-point star outline used by the default polygon, relative to the
/// object position.
fn default_star_points() -> Vec<Pos2> {
    vec![
        Pos2::new(100.0, 0.0),
        Pos2::new(200.0, 50.0),
        Pos2::new(150.0, 100.0),
        Pos2::new(50.0, 100.0),
        Pos2::new(0.0, 50.0),
    ]
}
