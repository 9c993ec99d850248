use crate::api::DogImage;
use crate::mvi::Intent;
use crate::store::RequestId;

use super::state::ImageQuery;

#[derive(Debug, Clone)]
pub enum ImagesIntent {
    /// `fetch_by_breed` or `fetch_random` was dispatched.
    Requested { request: RequestId, query: ImageQuery },

    Fulfilled {
        request: RequestId,
        query: ImageQuery,
        images: Vec<DogImage>,
    },

    Rejected { request: RequestId, message: String },
}

impl Intent for ImagesIntent {}
