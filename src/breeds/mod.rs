//! Breed list slice.
//!
//! - `state.rs` - breed list, load status, error
//! - `intent.rs` - fetch lifecycle events
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::BreedsIntent;
pub use reducer::BreedsReducer;
pub use state::BreedsState;
