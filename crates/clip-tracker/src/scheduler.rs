//! Periodic task scheduler
//!
//! Runs a named async job on a fixed interval until shut down. Ticks never
//! overlap: the next interval fires only after the previous run returns.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handle to a running periodic task
pub struct TaskHandle {
    name: &'static str,
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl TaskHandle {
    /// Signal shutdown and wait for the in-flight tick to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.join.await {
            error!(task = self.name, error = %e, "Periodic task panicked");
        }
        info!(task = self.name, "Periodic task stopped");
    }
}

/// Spawn a periodic task running `job` every `period`.
///
/// The first run happens after one full period, not immediately.
pub fn spawn_periodic<F, Fut>(name: &'static str, period: Duration, mut job: F) -> TaskHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let join = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // interval fires immediately on the first poll
        ticker.tick().await;

        info!(task = name, period_secs = period.as_secs(), "Periodic task started");
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    job().await;
                }
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }
    });

    TaskHandle {
        name,
        shutdown_tx,
        join,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_runs_on_each_period() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let handle = spawn_periodic("test", Duration::from_secs(60), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_secs(185)).await;
        handle.shutdown().await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_run_before_first_period() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let handle = spawn_periodic("test", Duration::from_secs(60), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_secs(30)).await;
        handle.shutdown().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
