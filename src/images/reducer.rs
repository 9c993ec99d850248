use crate::mvi::Reducer;
use crate::store::LoadStatus;

use super::intent::ImagesIntent;
use super::state::ImagesState;

pub struct ImagesReducer;

impl Reducer for ImagesReducer {
    type State = ImagesState;
    type Intent = ImagesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ImagesIntent::Requested { request, query } => {
                tracing::trace!(%request, %query, "images requested");
                ImagesState {
                    status: LoadStatus::Loading,
                    tracker: state.tracker.begin(request),
                    ..state
                }
            }

            ImagesIntent::Fulfilled {
                request,
                query,
                images,
            } => {
                if !state.tracker.accepts(request) {
                    tracing::debug!(%request, %query, "discarding superseded images");
                    return state;
                }
                ImagesState {
                    images,
                    status: LoadStatus::Succeeded,
                    shown: Some(query),
                    ..state
                }
            }

            ImagesIntent::Rejected { request, message } => {
                if !state.tracker.accepts(request) {
                    tracing::debug!(%request, "discarding superseded failure");
                    return state;
                }
                ImagesState {
                    status: LoadStatus::Failed,
                    error: Some(message),
                    ..state
                }
            }
        }
    }
}
