use crate::api::{DogImage, Identifier};
use crate::mvi::UiState;

/// Insertion-ordered favorites, unique by image id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub favorites: Vec<DogImage>,
}

impl UiState for FavoritesState {}

impl FavoritesState {
    pub fn contains(&self, id: &Identifier) -> bool {
        self.favorites.iter().any(|image| &image.id == id)
    }
}
