#![warn(clippy::all, rust_2018_idioms)]

pub mod action_log;
pub mod command;
pub mod id_generator;
pub mod loader;
pub mod object;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod util;

pub use action_log::{ActionEntry, ActionLog};
pub use command::{Command, CommandError, DEFAULT_STROKE_WIDTH};
pub use loader::{DecodedImage, ImageSource, LoadError};
pub use object::{Object, ObjectId, ShapeKind};
pub use renderer::{EXPORT_FILE_NAME, ExportError};
pub use scene::SceneGraph;
pub use session::{LoadOutcome, LoadTicket, Session, SessionError};
