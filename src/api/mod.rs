//! Dog API client.
//!
//! Three stateless GET calls (list breeds, search images by breed, search
//! random images). Failures are logged and returned unmodified.

mod client;
mod error;
mod types;

pub use client::{DogApi, DogApiClient};
pub use error::{ApiError, BoxError};
pub use types::{Breed, DogImage, Identifier};

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.thedogapi.com/v1";

/// Images returned per search request.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
