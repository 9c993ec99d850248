//! State container composing the breed, image and favorites slices.
//!
//! # Architecture
//!
//! ```text
//! view ──op──→ Store ──intent──→ slice reducer ──→ GalleryState
//!               │                      ↑
//!               └─ PendingFetch ─await─┴─ Settlement (Store::settle)
//! ```
//!
//! Every asynchronous dispatch is stamped with a [`RequestId`]. Each slice
//! remembers the latest one and the configured [`OrderingPolicy`] decides
//! whether an older settlement may still write.

mod container;
mod request;
mod settlement;
mod status;

pub use container::{FavoriteChange, GalleryState, Store};
pub use request::{OrderingPolicy, RequestCounter, RequestId, RequestTracker};
pub use settlement::{PendingFetch, Settlement};
pub use status::LoadStatus;
