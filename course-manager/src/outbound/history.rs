//! Navigation history kept in memory.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::ports::Navigator;

/// Stack of visited paths; the last entry is the current location.
#[derive(Debug)]
pub struct InMemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl InMemoryHistory {
    /// Start a history whose current location is `path`.
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![path.into()]),
        }
    }

    /// The current location.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.entries().pop()
    }

    /// Every visited path, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for InMemoryHistory {
    fn push(&self, path: &str) {
        debug!(path, "navigating");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
    }
}
