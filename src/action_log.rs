use serde::Serialize;

use crate::util::time;

/// One immutable record of a user-visible mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionEntry {
    /// Human-readable description of what happened
    pub description: String,
    /// Seconds since the UNIX epoch at append time
    pub timestamp: f64,
}

/// Append-only, chronological record of scene mutations.
///
/// The log is observational: entries are never edited or removed, and there
/// is no capacity limit for the life of a session. It is not an undo stack.
#[derive(Debug, Default)]
pub struct ActionLog {
    entries: Vec<ActionEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Always succeeds; insertion order is display order.
    pub fn append(&mut self, description: impl Into<String>) {
        self.entries.push(ActionEntry {
            description: description.into(),
            timestamp: time::current_time_secs(),
        });
    }

    /// Read-only view of the entries in append order.
    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    /// Point-in-time copy, safe to hold while more entries are appended.
    pub fn snapshot(&self) -> Vec<ActionEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
