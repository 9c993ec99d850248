//! Transient notifications shown after favorites change.
//!
//! - `state.rs` - toast state enum
//! - `intent.rs` - show / tick / dismiss
//! - `reducer.rs` - state transitions
//! - `widget.rs` - rendering

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{ToastKind, ToastState};
pub use widget::render_toast;
