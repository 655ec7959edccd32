//! Driven port for transient user notifications ("toasts").

/// Fire-and-forget notification channel.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Surface a success message to the user.
    fn success(&self, message: &str);
}

/// Notifier that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn success(&self, _message: &str) {}
}
