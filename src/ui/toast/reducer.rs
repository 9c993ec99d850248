use crate::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                kind,
                message,
                now,
                ttl,
            } => ToastState::Visible {
                kind,
                message,
                expires_at: now + ttl,
            },

            ToastIntent::Tick { now } => match state {
                ToastState::Visible { expires_at, .. } if now >= expires_at => ToastState::Hidden,
                other => other,
            },

            ToastIntent::Dismiss => ToastState::Hidden,
        }
    }
}
