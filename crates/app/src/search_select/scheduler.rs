use dioxus::core::Task;
use dioxus::prelude::*;
use std::time::Duration;

use super::SessionId;

/// Work the controller defers until a quiet period or hide delay elapses.
///
/// `ticket` identifies the scheduling call; the controller ignores a job whose
/// ticket is no longer the live one for its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    Search {
        session: SessionId,
        ticket: u64,
        query: String,
    },
    Hide {
        session: SessionId,
        ticket: u64,
    },
}

impl Deferred {
    pub fn session(&self) -> SessionId {
        match self {
            Deferred::Search { session, .. } | Deferred::Hide { session, .. } => *session,
        }
    }
}

/// Cancel handle returned by [`Scheduler::schedule`].
pub trait DeferredHandle {
    /// Stop the job from firing. Cancelling twice, or after the job fired, does nothing.
    fn cancel(&mut self);
}

/// Runs a [`Deferred`] job once `delay` has elapsed.
pub trait Scheduler {
    type Handle: DeferredHandle;

    fn schedule(&self, delay: Duration, job: Deferred) -> Self::Handle;
}

// -- Dioxus driver --

/// Scheduler backed by Dioxus tasks. Each job sleeps in its own task and is
/// then delivered to the driver coroutine, which feeds it back into the
/// controller.
#[derive(Clone, Copy)]
pub struct DioxusScheduler {
    driver: Coroutine<Deferred>,
}

impl DioxusScheduler {
    pub fn new(driver: Coroutine<Deferred>) -> Self {
        Self { driver }
    }
}

impl Scheduler for DioxusScheduler {
    type Handle = DeferredTask;

    fn schedule(&self, delay: Duration, job: Deferred) -> DeferredTask {
        let driver = self.driver;
        let task = spawn(async move {
            sleep(delay).await;
            driver.send(job);
        });
        DeferredTask(Some(task))
    }
}

/// A sleeping Dioxus task that can be cancelled before it fires.
pub struct DeferredTask(Option<Task>);

impl DeferredHandle for DeferredTask {
    fn cancel(&mut self) {
        if let Some(task) = self.0.take() {
            task.cancel();
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
