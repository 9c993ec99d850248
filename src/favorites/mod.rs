//! User-curated favorites. Synchronous, no load status.

mod intent;
mod reducer;
mod state;

pub use intent::FavoritesIntent;
pub use reducer::FavoritesReducer;
pub use state::FavoritesState;
