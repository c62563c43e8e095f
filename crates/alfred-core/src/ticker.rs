//! Cancellable periodic tick source.
//!
//! A [`RotationTicker`] is the single owner of the rotation interval: it is
//! started when a view mounts and cancelled when the view goes away. Ticks
//! arrive over a channel so the view applies them on its own task, in order.
//! Missed ticks (e.g. the process was suspended) are skipped, never replayed.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

pub struct RotationTicker {
    rx: mpsc::Receiver<Instant>,
    period: Duration,
    parent: CancellationToken,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl RotationTicker {
    /// Spawn the tick task. The first tick fires one full `period` after
    /// start. Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> Self {
        Self::start_with_token(period, CancellationToken::new())
    }

    /// Like [`Self::start`], stopping as well when `parent` is cancelled.
    pub fn start_with_token(period: Duration, parent: CancellationToken) -> Self {
        let cancel = parent.child_token();
        let (tx, rx) = mpsc::channel(1);
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    at = interval.tick() => {
                        // A full channel means the view has not consumed the
                        // previous tick yet; drop this one instead of queueing.
                        match tx.try_send(at) {
                            Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                            Err(mpsc::error::TrySendError::Closed(_)) => break,
                        }
                    }
                }
            }
            tracing::debug!("rotation ticker stopped");
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "rotation ticker started");
        Self {
            rx,
            period,
            parent,
            cancel,
            handle: Some(handle),
        }
    }

    /// Wait for the next tick. `None` once the ticker was stopped.
    pub async fn tick(&mut self) -> Option<Instant> {
        self.rx.recv().await
    }

    /// Start over: the next tick fires one full period from now and any
    /// tick still waiting in the channel is discarded.
    pub async fn restart(&mut self) {
        self.shutdown().await;
        *self = Self::start_with_token(self.period, self.parent.clone());
        tracing::debug!("rotation ticker restarted");
    }

    /// Cancel the tick task and wait for it to exit.
    pub async fn stop(mut self) {
        self.shutdown().await;
    }

    async fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RotationTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
