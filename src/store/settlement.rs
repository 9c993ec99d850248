use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::api::{Breed, DogImage};
use crate::images::ImageQuery;
use crate::store::RequestId;

/// Outcome of a dispatched fetch, handed back to [`Store::settle`].
///
/// Only the store creates settlements, so the view cannot fabricate state.
///
/// [`Store::settle`]: crate::store::Store::settle
#[derive(Debug)]
pub struct Settlement(pub(crate) SettlementKind);

#[derive(Debug)]
pub(crate) enum SettlementKind {
    Breeds {
        request: RequestId,
        outcome: Result<Vec<Breed>, String>,
    },
    Images {
        request: RequestId,
        query: ImageQuery,
        outcome: Result<Vec<DogImage>, String>,
    },
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            SettlementKind::Breeds { request, outcome } => match outcome {
                Ok(breeds) => write!(f, "breeds {}: {} entries", request, breeds.len()),
                Err(message) => write!(f, "breeds {}: failed ({})", request, message),
            },
            SettlementKind::Images {
                request,
                query,
                outcome,
            } => match outcome {
                Ok(images) => write!(f, "images {} [{}]: {} entries", request, query, images.len()),
                Err(message) => write!(f, "images {} [{}]: failed ({})", request, query, message),
            },
        }
    }
}

/// A fetch whose pending transition has been applied and whose network
/// half has not yet run. Await it (or spawn it) and pass the result to
/// `Store::settle`.
#[must_use = "a pending fetch does nothing unless awaited and settled"]
pub struct PendingFetch {
    request: RequestId,
    inner: Pin<Box<dyn Future<Output = Settlement> + Send + 'static>>,
}

impl PendingFetch {
    pub(crate) fn new<F>(request: RequestId, future: F) -> Self
    where
        F: Future<Output = Settlement> + Send + 'static,
    {
        Self {
            request,
            inner: Box::pin(future),
        }
    }

    pub fn request(&self) -> RequestId {
        self.request
    }
}

impl Future for PendingFetch {
    type Output = Settlement;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl fmt::Debug for PendingFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFetch")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
