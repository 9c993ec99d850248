//! Request tokens used to decide which settlement may write a slice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Monotonic token stamped on every asynchronous dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues increasing [`RequestId`]s. One per store.
#[derive(Debug, Default)]
pub struct RequestCounter {
    last: u64,
}

impl RequestCounter {
    pub fn next_id(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

/// Which settlement wins when fetches into the same slice overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Only the most recently dispatched request may write; older
    /// settlements are discarded.
    #[default]
    LatestDispatched,
    /// Every settlement is applied, so whichever finishes last wins.
    LatestSettled,
}

impl FromStr for OrderingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "latest_dispatched" => Ok(OrderingPolicy::LatestDispatched),
            "latest_settled" => Ok(OrderingPolicy::LatestSettled),
            other => Err(format!(
                "unknown ordering '{}' (expected latest-dispatched or latest-settled)",
                other
            )),
        }
    }
}

/// Per-slice record of the latest dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTracker {
    latest: Option<RequestId>,
    ordering: OrderingPolicy,
}

impl RequestTracker {
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self {
            latest: None,
            ordering,
        }
    }

    pub fn begin(self, request: RequestId) -> Self {
        Self {
            latest: Some(request),
            ..self
        }
    }

    /// Whether a settlement for `request` may be applied.
    pub fn accepts(&self, request: RequestId) -> bool {
        match self.ordering {
            OrderingPolicy::LatestSettled => true,
            OrderingPolicy::LatestDispatched => self.latest == Some(request),
        }
    }

}
