//! Driven port for one-way page navigation.

/// Moves the user to another page.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigate to `path`, replacing the current view.
    fn push(&self, path: &str);
}
