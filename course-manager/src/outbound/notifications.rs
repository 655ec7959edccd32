//! Toast notifications written to the tracing pipeline.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::ports::Notifier;

/// Notifier that logs each message under the `toast` target.
///
/// Delivered messages are also kept so a headless session can report them.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    delivered: Mutex<Vec<String>>,
}

impl TracingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, oldest first.
    #[must_use]
    pub fn delivered(&self) -> Vec<String> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "toast", kind = "success", message);
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
