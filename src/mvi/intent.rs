//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, selections)
/// - Settlements of asynchronous fetches
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
