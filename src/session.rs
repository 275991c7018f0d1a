use egui::Color32;
use log::info;
use thiserror::Error;
use uuid::Uuid;

use crate::action_log::ActionLog;
use crate::command::CommandError;
use crate::id_generator::generate_id;
use crate::loader::{self, DecodedImage, ImageSource, LoadError};
use crate::object::{ImageObject, ObjectId, ShapeKind, factory};
use crate::renderer::{self, ExportError};
use crate::scene::SceneGraph;
use crate::util::color;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("frame dimensions must be non-zero, got {0}x{1}")]
    InvalidFrame(u32, u32),
}

/// Receipt for an in-flight background load.
///
/// Carries the session identity and a load generation so that a completion
/// arriving late — after a newer load started, or aimed at a different
/// session — is discarded instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    session: Uuid,
    generation: u64,
}

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The decoded image became the scene background.
    Applied,
    /// The ticket was stale or foreign; nothing was mutated.
    Superseded,
}

/// One open editor instance: a frame, a scene graph and an action log,
/// driven by explicit commands. Never persisted; dropping (or calling
/// [`Session::dispose`]) releases every owned object and the decoded
/// background surface.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    frame_width: u32,
    frame_height: u32,
    scene: SceneGraph,
    log: ActionLog,
    load_generation: u64,
}

impl Session {
    /// Open a session over a frame of the given pixel dimensions. The frame
    /// is fixed for the session's lifetime; host resizes are not tracked.
    pub fn new(frame_width: u32, frame_height: u32) -> Result<Self, SessionError> {
        if frame_width == 0 || frame_height == 0 {
            return Err(SessionError::InvalidFrame(frame_width, frame_height));
        }
        let id = Uuid::new_v4();
        info!("session {id} opened, frame {frame_width}x{frame_height}");
        Ok(Self {
            id,
            frame_width,
            frame_height,
            scene: SceneGraph::new(),
            log: ActionLog::new(),
            load_generation: 0,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    // --- background loading ---------------------------------------------

    /// Start a background load. Any previously issued ticket is superseded;
    /// at most one load per session is current.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket {
            session: self.id,
            generation: self.load_generation,
        }
    }

    /// Apply the result of a load started with [`Session::begin_load`].
    ///
    /// A stale or foreign ticket is discarded without touching the scene. A
    /// decode failure is returned to the caller and likewise leaves the scene
    /// as it was — the session stays usable against an empty frame.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<DecodedImage, LoadError>,
    ) -> Result<LoadOutcome, LoadError> {
        if ticket.session != self.id || ticket.generation != self.load_generation {
            info!("discarding superseded load result for session {}", self.id);
            return Ok(LoadOutcome::Superseded);
        }

        let decoded = decoded?;
        let scale = loader::cover_scale(
            self.frame_width,
            self.frame_height,
            decoded.width,
            decoded.height,
        );
        let image = ImageObject::from_decoded(generate_id(), decoded, scale)?;
        info!(
            "background set: natural {}x{}, cover scale {scale:.3}",
            image.natural_width(),
            image.natural_height()
        );
        self.scene.set_background(image);
        Ok(LoadOutcome::Applied)
    }

    /// Synchronous convenience: fetch, decode and apply in one call.
    pub fn load_background(&mut self, source: &ImageSource) -> Result<LoadOutcome, LoadError> {
        let ticket = self.begin_load();
        let decoded = loader::decode(source);
        self.complete_load(ticket, decoded)
    }

    // --- object factory --------------------------------------------------

    /// Insert the placeholder text object on top and select it.
    pub fn create_text(&mut self) -> ObjectId {
        let id = self.scene.add(factory::create_text(generate_id()));
        self.log.append("Added text");
        info!("added text object {id}");
        id
    }

    /// Insert a shape of the given kind on top and select it. An unknown
    /// kind is rejected with no scene mutation and no log entry.
    pub fn create_shape(&mut self, kind: &str) -> Result<ObjectId, CommandError> {
        let kind: ShapeKind = kind
            .parse()
            .map_err(|_| CommandError::UnknownShape(kind.to_owned()))?;
        Ok(self.add_shape(kind))
    }

    /// Typed variant of [`Session::create_shape`].
    pub fn add_shape(&mut self, kind: ShapeKind) -> ObjectId {
        let id = self.scene.add(factory::create_shape(generate_id(), kind));
        self.log.append(format!("Added {}", kind.as_str()));
        info!("added {} object {id}", kind.as_str());
        id
    }

    // --- style mutation --------------------------------------------------

    /// Recolor the active object's fill in place, preserving every other
    /// attribute. No-op without a selection.
    pub fn apply_fill(&mut self, fill: Color32) -> Result<(), CommandError> {
        let object = self
            .scene
            .active_object_mut()
            .ok_or(CommandError::NoSelection)?;
        let object_type = object.object_type();
        // The background is never selectable, so a style is always present.
        let style = object.style_mut().ok_or(CommandError::NoSelection)?;
        style.fill = fill;
        self.log.append(format!(
            "Applied fill {} to {object_type}",
            color::to_hex(fill)
        ));
        Ok(())
    }

    /// Restyle the active object's outline in place. No-op without a
    /// selection.
    pub fn apply_stroke(&mut self, stroke: Color32, width: f32) -> Result<(), CommandError> {
        let object = self
            .scene
            .active_object_mut()
            .ok_or(CommandError::NoSelection)?;
        let object_type = object.object_type();
        let style = object.style_mut().ok_or(CommandError::NoSelection)?;
        style.stroke = stroke;
        style.stroke_width = width;
        self.log.append(format!(
            "Applied stroke {} (width {width}) to {object_type}",
            color::to_hex(stroke)
        ));
        Ok(())
    }

    /// Host-reported pointer selection change. The background is refused.
    pub fn select(&mut self, id: ObjectId) -> bool {
        self.scene.set_active(id)
    }

    // --- export and teardown ---------------------------------------------

    /// Rasterize the current scene to a PNG buffer at the frame dimensions.
    pub fn export(&self) -> Result<Vec<u8>, ExportError> {
        renderer::render_png(&self.scene, self.frame_width, self.frame_height)
    }

    /// Tear the session down, detaching all objects and releasing the
    /// background surface. Consuming `self` means no late load completion or
    /// command can ever reach a disposed session.
    pub fn dispose(mut self) {
        self.scene.clear();
        info!("session {} disposed", self.id);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.scene.is_empty() {
            self.scene.clear();
        }
    }
}
