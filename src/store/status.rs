use std::fmt;

/// Lifecycle of a slice's most recent asynchronous fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing has been dispatched yet.
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl LoadStatus {
    pub fn is_idle(self) -> bool {
        self == LoadStatus::Idle
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Succeeded => "succeeded",
            LoadStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
