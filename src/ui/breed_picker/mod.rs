//! Breed picker popup.
//!
//! A searchable list of fetched breeds. With an empty query the first entry
//! is "All breeds", which clears the selection and shows random images.
//!
//! Uses MVI:
//! - `state.rs` - popup state and entry filtering
//! - `intent.rs` - user actions
//! - `reducer.rs` - state transitions
//! - `popup.rs` - rendering

mod intent;
mod popup;
mod reducer;
mod state;

pub use intent::BreedPickerIntent;
pub use popup::{render_breed_picker, BreedSource};
pub use reducer::BreedPickerReducer;
pub use state::{picker_entries, BreedPickerState, PickerEntry};
