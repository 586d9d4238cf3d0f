//! Single-slot idle timer
//!
//! Holds at most one spawned tokio task. Scheduling always aborts the
//! previous task first; dropping the timer aborts whatever is pending.

use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct IdleTimer {
    runtime: Handle,
    handle: Option<JoinHandle<()>>,
}

impl IdleTimer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            handle: None,
        }
    }

    /// Cancel any pending callback and run `on_expire` after `delay`.
    pub fn reschedule<F, Fut>(&mut self, delay: Duration, on_expire: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let deadline = tokio::time::Instant::now() + delay;
        self.handle = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_expire().await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while a callback is scheduled and has not yet completed
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for IdleTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
