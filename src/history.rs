//! Bounded log of recent detection results, newest first
//!
//! History is session-scoped: the session clears it whenever a new image is
//! acquired, so entries never span two source images.

use crate::palette::DetectionResult;

/// Maximum number of history lines kept
pub const HISTORY_CAPACITY: usize = 5;

/// Most-recent-first list of formatted detection lines, bounded at
/// [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistory {
    entries: Vec<String>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Format `result` as its display line and prepend it, dropping the
    /// oldest entry once the capacity is exceeded.
    pub fn record(&mut self, result: &DetectionResult) {
        self.entries.insert(0, result.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Drop all entries. Invoked on every new-image event.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Formatted lines, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The most recent line, if any.
    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
