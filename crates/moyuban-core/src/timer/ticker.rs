//! Recurring refresh task.
//!
//! A [`Ticker`] runs a callback immediately and then once per period on the
//! tokio runtime. At most one task is alive per ticker: starting again
//! aborts the previous task before spawning the new one, and dropping the
//! ticker stops it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut ticker = Ticker::new();
//! ticker.start(Duration::from_secs(60), || render());
//! // settings saved with a new refresh period:
//! ticker.start(Duration::from_secs(30), || render());
//! ticker.stop();
//! ```

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    period: Option<Duration>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking, replacing any running task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, period: Duration, mut on_tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        if self.stop() {
            tracing::debug!(period_secs = period.as_secs(), "replacing running ticker");
        }
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                on_tick();
            }
        });
        self.handle = Some(handle);
        self.period = Some(period);
    }

    /// Stop ticking. Returns whether a task was running.
    pub fn stop(&mut self) -> bool {
        self.period = None;
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Period of the running task.
    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
