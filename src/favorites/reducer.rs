use crate::mvi::Reducer;

use super::intent::FavoritesIntent;
use super::state::FavoritesState;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Add(image) => {
                if !state.contains(&image.id) {
                    state.favorites.push(image);
                }
                state
            }
            FavoritesIntent::Remove(image) => {
                state.favorites.retain(|item| item.id != image.id);
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DogImage;

    fn image(id: &str) -> DogImage {
        DogImage::new(id, format!("https://cdn/{id}.jpg"))
    }

    #[test]
    fn add_appends_in_order() {
        let state = FavoritesReducer::reduce(FavoritesState::default(), FavoritesIntent::Add(image("a")));
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Add(image("b")));
        assert_eq!(state.favorites, vec![image("a"), image("b")]);
    }

    #[test]
    fn duplicate_add_is_noop() {
        let state = FavoritesReducer::reduce(FavoritesState::default(), FavoritesIntent::Add(image("a")));
        let before = state.clone();
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Add(image("a")));
        assert_eq!(state, before);
    }

    #[test]
    fn duplicate_id_with_different_url_is_still_a_duplicate() {
        let state = FavoritesReducer::reduce(FavoritesState::default(), FavoritesIntent::Add(image("a")));
        let state = FavoritesReducer::reduce(
            state,
            FavoritesIntent::Add(DogImage::new("a", "https://elsewhere/a.png")),
        );
        assert_eq!(state.favorites.len(), 1);
        assert_eq!(state.favorites[0].url, "https://cdn/a.jpg");
    }

    #[test]
    fn remove_missing_leaves_state_unchanged() {
        let state = FavoritesReducer::reduce(FavoritesState::default(), FavoritesIntent::Add(image("a")));
        let before = state.clone();
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Remove(image("zzz")));
        assert_eq!(state, before);
    }

    #[test]
    fn remove_then_add_appends_at_end() {
        let mut state = FavoritesState::default();
        for id in ["a", "b", "c"] {
            state = FavoritesReducer::reduce(state, FavoritesIntent::Add(image(id)));
        }
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Remove(image("a")));
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Add(image("a")));

        let ids: Vec<String> = state.favorites.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
