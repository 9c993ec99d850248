use std::fmt;

use crate::api::{DogImage, Identifier};
use crate::mvi::UiState;
use crate::store::{LoadStatus, OrderingPolicy, RequestTracker};

/// What an image search was filtered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageQuery {
    Random,
    Breed(Identifier),
}

impl fmt::Display for ImageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageQuery::Random => f.write_str("random"),
            ImageQuery::Breed(id) => write!(f, "breed {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImagesState {
    pub images: Vec<DogImage>,
    pub status: LoadStatus,
    /// Message of the last failed fetch. Not cleared by later dispatches.
    pub error: Option<String>,
    /// Query whose payload is currently in `images`.
    pub shown: Option<ImageQuery>,
    pub(crate) tracker: RequestTracker,
}

impl UiState for ImagesState {}

impl ImagesState {
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self {
            tracker: RequestTracker::new(ordering),
            ..Self::default()
        }
    }
}
