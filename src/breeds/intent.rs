use crate::api::Breed;
use crate::mvi::Intent;
use crate::store::RequestId;

#[derive(Debug, Clone)]
pub enum BreedsIntent {
    /// `fetch_breeds` was dispatched.
    Requested { request: RequestId },

    /// The breed list arrived.
    Fulfilled {
        request: RequestId,
        breeds: Vec<Breed>,
    },

    /// The fetch failed.
    Rejected { request: RequestId, message: String },
}

impl Intent for BreedsIntent {}
