use std::time::Instant;

use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible {
        kind: ToastKind,
        message: String,
        expires_at: Instant,
    },
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message, .. } => Some(message),
            Self::Hidden => None,
        }
    }

    pub fn kind(&self) -> Option<ToastKind> {
        match self {
            Self::Visible { kind, .. } => Some(*kind),
            Self::Hidden => None,
        }
    }
}
