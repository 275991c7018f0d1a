use egui::Color32;
use thiserror::Error;

use crate::object::ShapeKind;
use crate::session::Session;

/// Stroke width used when a host does not specify one.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Errors from command execution.
///
/// Both variants degrade to "no mutation occurred": the scene graph and the
/// action log are left exactly as they were.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The requested shape kind is not one the factory knows.
    #[error("unknown shape kind: {0}")]
    UnknownShape(String),
    /// A style mutation was attempted with nothing selected.
    #[error("no active selection")]
    NoSelection,
}

/// Commands the host can run against a session.
///
/// This is the explicit interface replacing UI-bound callbacks: every
/// user-triggered mutation goes through one of these, so a host toolbar,
/// a script, or a test all drive the engine the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert the placeholder text object
    AddText,
    /// Insert a shape at its default placement
    AddShape(ShapeKind),
    /// Recolor the active object's fill
    ApplyFill(Color32),
    /// Restyle the active object's outline
    ApplyStroke { color: Color32, width: f32 },
}

impl Command {
    /// Execute against a session. Creation commands always succeed; style
    /// commands require an active selection.
    pub fn apply(self, session: &mut Session) -> Result<(), CommandError> {
        match self {
            Command::AddText => {
                session.create_text();
                Ok(())
            }
            Command::AddShape(kind) => {
                session.add_shape(kind);
                Ok(())
            }
            Command::ApplyFill(color) => session.apply_fill(color),
            Command::ApplyStroke { color, width } => session.apply_stroke(color, width),
        }
    }
}
