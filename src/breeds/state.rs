use crate::api::Breed;
use crate::mvi::UiState;
use crate::store::{LoadStatus, OrderingPolicy, RequestTracker};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BreedsState {
    pub breeds: Vec<Breed>,
    pub status: LoadStatus,
    /// Message of the last failed fetch. Not cleared by later dispatches.
    pub error: Option<String>,
    pub(crate) tracker: RequestTracker,
}

impl UiState for BreedsState {}

impl BreedsState {
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self {
            tracker: RequestTracker::new(ordering),
            ..Self::default()
        }
    }

    pub fn find(&self, name: &str) -> Option<&Breed> {
        self.breeds
            .iter()
            .find(|breed| breed.name.eq_ignore_ascii_case(name))
    }
}
