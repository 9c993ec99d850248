use crate::api::DogImage;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    /// Append unless an entry with the same id exists.
    Add(DogImage),
    /// Drop the entry with the same id, if any.
    Remove(DogImage),
}

impl Intent for FavoritesIntent {}
