//! Displayed-images slice.
//!
//! Both the by-breed and the random search write the same result slot.
//! Which settlement may write is decided by the slice's
//! [`OrderingPolicy`](crate::store::OrderingPolicy).

mod intent;
mod reducer;
mod state;

pub use intent::ImagesIntent;
pub use reducer::ImagesReducer;
pub use state::{ImageQuery, ImagesState};
