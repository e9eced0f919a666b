//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions on the widget (toggles, checkbox
/// clicks, add/remove buttons). They are processed by reducers to
/// produce new states.
pub trait Intent: Send + 'static {}
