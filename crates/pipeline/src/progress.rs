//! Cancellable ticker driving the synthetic progress value.
//!
//! The ticker advances a shared `watch` channel on a fixed cadence while the
//! relay call is pending. The orchestrator must consume the handle on both
//! resolution paths ([`complete`](ProgressTicker::complete) on success,
//! [`reset`](ProgressTicker::reset) on failure) so no timer outlives the
//! attempt.

use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use vidgen_core::progress::{SyntheticProgress, PROGRESS_COMPLETE};

/// Time between synthetic progress increments.
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_secs(2);

/// Handle to a running progress ticker.
///
/// Dropping the handle without calling either finisher would leave the task
/// running; the orchestrator always resolves it explicitly.
pub struct ProgressTicker {
    cancel: CancellationToken,
    tx: watch::Sender<u8>,
    task: tokio::task::JoinHandle<()>,
}

impl ProgressTicker {
    /// Reset the channel to zero and start ticking.
    ///
    /// The first increment lands one full interval after the start, and the
    /// value saturates at the ceiling until the attempt resolves.
    pub fn start(tx: watch::Sender<u8>) -> Self {
        // send_replace rather than send: the value must update even while
        // nobody is subscribed yet.
        tx.send_replace(0);
        let cancel = CancellationToken::new();

        let task = tokio::spawn({
            let tx = tx.clone();
            let cancel = cancel.clone();
            async move {
                let mut progress = SyntheticProgress::new();
                let first_tick = tokio::time::Instant::now() + PROGRESS_TICK_INTERVAL;
                let mut interval = tokio::time::interval_at(first_tick, PROGRESS_TICK_INTERVAL);
                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = interval.tick() => {
                            tx.send_replace(progress.tick());
                        }
                    }
                }
            }
        });

        Self { cancel, tx, task }
    }

    /// Stop ticking and publish full progress (success path).
    pub async fn complete(self) {
        self.stop(PROGRESS_COMPLETE).await;
    }

    /// Stop ticking and publish zero (failure path).
    pub async fn reset(self) {
        self.stop(0).await;
    }

    async fn stop(self, final_value: u8) {
        self.cancel.cancel();
        // Wait the task out so a late tick cannot overwrite the final value.
        let _ = self.task.await;
        self.tx.send_replace(final_value);
    }
}
