use crate::api::Breed;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum BreedPickerState {
    #[default]
    Hidden,
    Visible {
        query: String,
        selected: usize,
    },
}

impl UiState for BreedPickerState {}

impl BreedPickerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn query(&self) -> &str {
        match self {
            Self::Visible { query, .. } => query,
            Self::Hidden => "",
        }
    }

    pub fn selected(&self) -> usize {
        match self {
            Self::Visible { selected, .. } => *selected,
            Self::Hidden => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerEntry<'a> {
    AllBreeds,
    Breed(&'a Breed),
}

/// Entries shown for `query`: case-insensitive substring match on name.
pub fn picker_entries<'a>(breeds: &'a [Breed], query: &str) -> Vec<PickerEntry<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return std::iter::once(PickerEntry::AllBreeds)
            .chain(breeds.iter().map(PickerEntry::Breed))
            .collect();
    }
    breeds
        .iter()
        .filter(|breed| breed.name.to_lowercase().contains(&needle))
        .map(PickerEntry::Breed)
        .collect()
}
