use crate::mvi::Reducer;
use crate::store::LoadStatus;

use super::intent::BreedsIntent;
use super::state::BreedsState;

pub struct BreedsReducer;

impl Reducer for BreedsReducer {
    type State = BreedsState;
    type Intent = BreedsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // error stays until a settlement overwrites it
            BreedsIntent::Requested { request } => BreedsState {
                status: LoadStatus::Loading,
                tracker: state.tracker.begin(request),
                ..state
            },

            BreedsIntent::Fulfilled { request, breeds } => {
                if !state.tracker.accepts(request) {
                    return state;
                }
                BreedsState {
                    breeds,
                    status: LoadStatus::Succeeded,
                    ..state
                }
            }

            BreedsIntent::Rejected { request, message } => {
                if !state.tracker.accepts(request) {
                    return state;
                }
                BreedsState {
                    status: LoadStatus::Failed,
                    error: Some(message),
                    ..state
                }
            }
        }
    }
}
