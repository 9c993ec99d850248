use crate::mvi::Reducer;

use super::intent::BreedPickerIntent;
use super::state::BreedPickerState;

pub struct BreedPickerReducer;

impl Reducer for BreedPickerReducer {
    type State = BreedPickerState;
    type Intent = BreedPickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BreedPickerIntent::Open => BreedPickerState::Visible {
                query: String::new(),
                selected: 0,
            },

            BreedPickerIntent::Close => BreedPickerState::Hidden,

            BreedPickerIntent::Input(ch) => match state {
                BreedPickerState::Visible { mut query, .. } => {
                    query.push(ch);
                    BreedPickerState::Visible { query, selected: 0 }
                }
                other => other,
            },

            BreedPickerIntent::Backspace => match state {
                BreedPickerState::Visible { mut query, .. } => {
                    query.pop();
                    BreedPickerState::Visible { query, selected: 0 }
                }
                other => other,
            },

            BreedPickerIntent::Move { delta, entries } => match state {
                BreedPickerState::Visible { query, selected } => {
                    let selected = if entries == 0 {
                        0
                    } else {
                        // wrap around at both ends
                        (selected as isize + delta).rem_euclid(entries as isize) as usize
                    };
                    BreedPickerState::Visible { query, selected }
                }
                other => other,
            },
        }
    }
}
