//! One-shot deferred client results.
//!
//! A [`PendingResult`] is the receiving half of a one-shot channel; the host
//! keeps the matching [`Resolver`] and completes it when the client answers.
//! Dropping the resolver unanswered is how a host says "the client is gone".

use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Create a connected resolver / pending result pair.
pub fn channel() -> (Resolver, PendingResult) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, PendingResult { rx })
}

/// Completes a [`PendingResult`] with the client's answer.
#[derive(Debug)]
pub struct Resolver {
    tx: oneshot::Sender<Value>,
}

impl Resolver {
    /// Deliver the answer. Returns `false` when nobody is waiting for it
    /// any more, which is not an error.
    pub fn resolve(self, value: Value) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// The eventual answer of the client to one command.
#[derive(Debug)]
pub struct PendingResult {
    rx: oneshot::Receiver<Value>,
}

impl PendingResult {
    /// A result that will never be answered (client unreachable).
    pub fn unreachable() -> Self {
        let (_, pending) = channel();
        pending
    }

    /// Wait for the answer. `None` means the client will never answer.
    pub async fn settled(self) -> Option<Value> {
        self.rx.await.ok()
    }

    /// Run `on_resolved` with the answer once it arrives.
    ///
    /// The callback runs on a task of the ambient tokio runtime, not on the
    /// caller's stack. It is never called if the client does not answer.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn then<F>(self, on_resolved: F) -> JoinHandle<()>
    where
        F: FnOnce(Value) + Send + 'static,
    {
        tokio::spawn(async move {
            if let Some(value) = self.settled().await {
                on_resolved(value);
            }
        })
    }
}
