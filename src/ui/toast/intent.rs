use std::time::{Duration, Instant};

use crate::mvi::Intent;

use super::state::ToastKind;

#[derive(Debug, Clone)]
pub enum ToastIntent {
    /// Show a message, replacing any visible one.
    Show {
        kind: ToastKind,
        message: String,
        now: Instant,
        ttl: Duration,
    },

    /// Periodic tick; hides the toast once it has expired.
    Tick { now: Instant },

    Dismiss,
}

impl Intent for ToastIntent {}
