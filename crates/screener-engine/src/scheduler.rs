//! Periodic cycle driver.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Cadence of the screening loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Seconds between cycle starts.
    pub interval_secs: u64,
    /// Granularity of the wakeup check.
    pub tick_secs: u64,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            interval_secs: 4 * 60 * 60,
            tick_secs: 60,
        }
    }
}

/// Runs a cycle immediately on start, then again each time the interval
/// elapses. Wakeups happen on a coarse tick so an overrunning cycle
/// simply delays the next one instead of stacking.
pub struct Scheduler {
    interval: Duration,
    tick: Duration,
}

impl Scheduler {
    pub fn new(settings: &ScheduleSettings) -> Self {
        Self {
            interval: Duration::from_secs(settings.interval_secs),
            tick: Duration::from_secs(settings.tick_secs),
        }
    }

    /// Drive `cycle` forever. Never returns.
    pub async fn run<F, Fut>(&self, mut cycle: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        info!(
            interval_secs = self.interval.as_secs(),
            "scheduler started, running first cycle now"
        );
        cycle().await;
        let mut next_run = Instant::now() + self.interval;

        loop {
            tokio::time::sleep(self.tick).await;
            if Instant::now() >= next_run {
                debug!("interval elapsed, starting cycle");
                cycle().await;
                next_run = Instant::now() + self.interval;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_runs_immediately_then_per_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let scheduler = Scheduler::new(&ScheduleSettings {
            interval_secs: 4 * 60 * 60,
            tick_secs: 60,
        });

        let counter = count.clone();
        let handle = tokio::spawn(async move {
            scheduler
                .run(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .await;
        });

        // First cycle fires on startup.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Two more intervals pass; two more cycles.
        tokio::time::sleep(Duration::from_secs(2 * 4 * 60 * 60 + 120)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_extra_cycles_inside_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let scheduler = Scheduler::new(&ScheduleSettings {
            interval_secs: 3600,
            tick_secs: 60,
        });

        let counter = count.clone();
        let handle = tokio::spawn(async move {
            scheduler
                .run(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .await;
        });

        tokio::time::sleep(Duration::from_secs(3599)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        handle.abort();
    }
}
