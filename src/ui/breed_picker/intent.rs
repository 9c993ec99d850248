use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BreedPickerIntent {
    Open,
    Close,
    /// Append a character to the search query.
    Input(char),
    Backspace,
    /// Move the highlight; `entries` is the current filtered count.
    Move { delta: isize, entries: usize },
}

impl Intent for BreedPickerIntent {}
