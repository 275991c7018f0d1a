use log::info;

use crate::object::{ImageObject, Object, ObjectId};

/// Ordered collection of drawable objects.
///
/// Paint order is bottom-to-top by index; the background image, when present,
/// is always index 0. The active selection is an index into the list, never
/// an owning pointer, and never refers to the background.
#[derive(Debug, Default)]
pub struct SceneGraph {
    objects: Vec<Object>,
    active: Option<usize>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects in paint order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The background image, if one has been loaded.
    pub fn background(&self) -> Option<&ImageObject> {
        match self.objects.first() {
            Some(Object::Image(image)) => Some(image),
            _ => None,
        }
    }

    /// Install `image` as the bottom-most member, replacing any prior
    /// background. The selection is preserved across the insert.
    pub fn set_background(&mut self, image: ImageObject) {
        if matches!(self.objects.first(), Some(Object::Image(_))) {
            self.objects[0] = Object::Image(image);
        } else {
            self.objects.insert(0, Object::Image(image));
            // Everything above shifted up by one
            if let Some(index) = self.active {
                self.active = Some(index + 1);
            }
        }
    }

    /// Append `object` as the new top-most member and make it the active
    /// selection. Returns its id.
    pub fn add(&mut self, object: Object) -> ObjectId {
        debug_assert!(object.selectable(), "background must go through set_background");
        let id = object.id();
        self.objects.push(object);
        self.active = Some(self.objects.len() - 1);
        id
    }

    /// Host-reported pointer selection. Returns false (selection unchanged)
    /// for unknown ids and for the non-selectable background.
    pub fn set_active(&mut self, id: ObjectId) -> bool {
        let found = self
            .objects
            .iter()
            .position(|o| o.id() == id && o.selectable());
        match found {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn active_object(&self) -> Option<&Object> {
        self.active.map(|i| &self.objects[i])
    }

    pub(crate) fn active_object_mut(&mut self) -> Option<&mut Object> {
        self.active.map(|i| &mut self.objects[i])
    }

    /// Detach every object and drop the selection (session teardown).
    pub fn clear(&mut self) {
        let count = self.objects.len();
        self.objects.clear();
        self.active = None;
        info!("scene cleared, {count} objects released");
    }
}
