//! Fixed-latency simulated work.
//!
//! Every "backend" interaction in FarmIQ is a [`SimulatedTask`]: submit
//! flips the phase to pending right away, a timer stands in for the real
//! call, and when it elapses the job runs and the phase flips to
//! completed. Swapping the sleep for a real request later changes nothing
//! about the state machine the callers observe.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

/// Where a simulated task currently is. Transitions only
/// idle → pending → completed, then back to idle via [`SimulatedTask::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Completed,
}

/// A single-slot simulated async task. At most one submission is in
/// flight; submitting while pending is a no-op. The simulated backend
/// never fails, so there is no error phase.
pub struct SimulatedTask<T> {
    phase_tx: watch::Sender<Phase>,
    phase_rx: watch::Receiver<Phase>,
    result: Arc<Mutex<Option<T>>>,
}

impl<T: Send + 'static> SimulatedTask<T> {
    pub fn new() -> Self {
        let (phase_tx, phase_rx) = watch::channel(Phase::Idle);
        Self {
            phase_tx,
            phase_rx,
            result: Arc::new(Mutex::new(None)),
        }
    }

    /// Current phase, readable at any time.
    pub fn phase(&self) -> Phase {
        *self.phase_rx.borrow()
    }

    /// The completed result, present only while the phase is completed.
    pub fn result(&self) -> Option<T>
    where
        T: Clone,
    {
        self.result.lock().unwrap().clone()
    }

    /// Submit work. Returns `false` (and does nothing) if a submission is
    /// already pending; otherwise the phase is pending before this
    /// returns. After `delay` elapses the job runs, the result slot is
    /// filled, and the phase becomes completed. Any previous result is
    /// cleared on submission.
    pub fn submit<F, Fut>(&self, delay: Duration, job: F) -> bool
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        if self.phase() == Phase::Pending {
            return false;
        }

        self.result.lock().unwrap().take();
        let _ = self.phase_tx.send(Phase::Pending);

        let phase_tx = self.phase_tx.clone();
        let result = Arc::clone(&self.result);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let value = job().await;
            // Result must be visible before the phase flips.
            *result.lock().unwrap() = Some(value);
            let _ = phase_tx.send(Phase::Completed);
        });

        true
    }

    /// Wait until the current submission completes and return its result.
    pub async fn wait(&self) -> T
    where
        T: Clone,
    {
        let mut rx = self.phase_rx.clone();
        rx.wait_for(|phase| *phase == Phase::Completed)
            .await
            .expect("phase sender lives as long as the task");
        self.result()
            .expect("completed task always holds a result")
    }

    /// Return to idle, clearing the result. Only meaningful from
    /// completed; returns `false` otherwise.
    pub fn reset(&self) -> bool {
        if self.phase() != Phase::Completed {
            return false;
        }
        self.result.lock().unwrap().take();
        let _ = self.phase_tx.send(Phase::Idle);
        true
    }
}

impl<T: Send + 'static> Default for SimulatedTask<T> {
    fn default() -> Self {
        Self::new()
    }
}
