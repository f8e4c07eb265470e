//! Handle over a store call running in the background.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::domain::errors::BillError;

/// A spawned operation the caller may await or drop.
///
/// Dropping the handle detaches the task; it still runs to completion.
#[derive(Debug)]
#[must_use = "drop explicitly with `detach` to ignore the outcome"]
pub struct PendingOperation<T> {
    handle: JoinHandle<Result<T, BillError>>,
}

impl<T: Send + 'static> PendingOperation<T> {
    /// Spawns `future` on the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, BillError>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Waits for the operation's outcome.
    ///
    /// # Errors
    /// Returns the operation's error, or `Task` if the task panicked.
    pub async fn wait(self) -> Result<T, BillError> {
        self.handle
            .await
            .map_err(|e| BillError::task(e.to_string()))?
    }

    /// Returns whether the operation has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Lets the operation run without observing it.
    pub fn detach(self) {}
}
