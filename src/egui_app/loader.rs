//! Async Load Plumbing
//!
//! Views own a [`Loadable`] per record they display. The fetch runs as a task
//! on the app's tokio runtime and reports back over an mpsc channel that the
//! view polls once per frame, so the egui thread never blocks. Dropping the
//! [`PendingFetch`] cancels its token; a result arriving after that is
//! discarded with the channel.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::shared::error::{PortalError, Result};

/// Load status of a view's data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// A fetch in flight on the runtime
pub struct PendingFetch<T> {
    rx: Receiver<Result<T>>,
    cancel: CancellationToken,
}

impl<T: Send + 'static> PendingFetch<T> {
    /// Spawn `fetch` on `runtime`, handing it a fresh cancellation token.
    pub fn spawn<F, Fut>(runtime: &Handle, fetch: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = channel();
        let cancel = CancellationToken::new();
        let task = fetch(cancel.clone());

        runtime.spawn(async move {
            let result = task.await;
            // Receiver is gone once the owning view unmounts
            let _ = tx.send(result);
        });

        Self { rx, cancel }
    }
}

impl<T> PendingFetch<T> {
    /// Non-blocking check for the result.
    fn try_take(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PortalError::Disconnected)),
        }
    }

    fn take_timeout(&self, timeout: Duration) -> Option<Result<T>> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(PortalError::Disconnected)),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<T> Drop for PendingFetch<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// A record together with its load status and the fetch producing it
pub struct Loadable<T> {
    resource: &'static str,
    status: LoadStatus<T>,
    pending: Option<PendingFetch<T>>,
}

impl<T> Loadable<T> {
    /// Start in `Loading`, waiting on `pending`.
    pub fn start(resource: &'static str, pending: PendingFetch<T>) -> Self {
        tracing::debug!("[LOAD] {} loading", resource);
        Self {
            resource,
            status: LoadStatus::Loading,
            pending: Some(pending),
        }
    }

    pub fn status(&self) -> &LoadStatus<T> {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the fetch result if it has arrived. Returns true when the status changed.
    pub fn poll(&mut self) -> bool {
        let result = match self.pending.as_ref().and_then(PendingFetch::try_take) {
            Some(result) => result,
            None => return false,
        };
        self.settle(result)
    }

    /// Block up to `timeout` for the fetch to settle. Returns true when the status changed.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let result = match self.pending.as_ref().and_then(|p| p.take_timeout(timeout)) {
            Some(result) => result,
            None => return false,
        };
        self.settle(result)
    }

    fn settle(&mut self, result: Result<T>) -> bool {
        let stale = self.pending.take().is_some_and(|p| p.is_cancelled());
        match result {
            Ok(value) => {
                tracing::debug!("[LOAD] {} loaded", self.resource);
                self.status = LoadStatus::Loaded(value);
            }
            // Our own token fired, so the result is stale
            Err(e) if e.is_cancelled() && stale => {
                tracing::debug!("[LOAD] {} cancelled", self.resource);
                return false;
            }
            Err(e) => {
                tracing::error!("[LOAD] {} failed: {}", self.resource, e);
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }
}
