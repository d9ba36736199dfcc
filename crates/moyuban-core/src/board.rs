//! Board controller: settings snapshot, storage and the refresh ticker.
//!
//! The board holds the current settings as an immutable `Arc<Settings>`.
//! Saving writes through the store and swaps in a new snapshot; if the board
//! is ticking, the ticker is replaced so the new refresh period and values
//! take effect on the next render. Each tick computes a fresh [`Dashboard`]
//! and sends it to the sink given to [`Board::start`].

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime};
use rand::Rng;
use tokio::sync::mpsc::UnboundedSender;

use crate::error::StorageError;
use crate::progress::Dashboard;
use crate::settings::Settings;
use crate::storage::{load_settings_on, save_settings, SettingsStore};
use crate::timer::Ticker;

/// Source of "now" for ticks.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct Board<S: SettingsStore> {
    store: S,
    settings: Arc<Settings>,
    ticker: Ticker,
    sink: Option<UnboundedSender<Dashboard>>,
    clock: Clock,
}

impl<S: SettingsStore> Board<S> {
    /// Load settings from `store`.
    pub fn open(store: S) -> Self {
        Self::open_on(store, Local::now().date_naive())
    }

    /// Load settings from `store`, defaulting the hire date to `today`.
    pub fn open_on(store: S, today: NaiveDate) -> Self {
        let settings = Arc::new(load_settings_on(&store, today));
        Self {
            store,
            settings,
            ticker: Ticker::new(),
            sink: None,
            clock: local_now,
        }
    }

    /// Replace the clock used by ticks.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compute the dashboard for `now` from the current snapshot.
    pub fn render<R: Rng + ?Sized>(&self, now: NaiveDateTime, rng: &mut R) -> Dashboard {
        Dashboard::compute(now, &self.settings, rng)
    }

    /// Persist `settings` and make them current.
    ///
    /// Returns the snapshot actually stored (after sanitizing).
    pub fn save(&mut self, settings: Settings) -> Result<Arc<Settings>, StorageError> {
        let saved = save_settings(&self.store, settings)?;
        self.settings = Arc::new(saved);
        if self.ticker.is_running() {
            self.spawn_ticker();
        }
        Ok(self.settings())
    }

    /// Start rendering every `refresh` seconds into `sink`, replacing any
    /// previous ticker. Must be called from within a tokio runtime.
    pub fn start(&mut self, sink: UnboundedSender<Dashboard>) {
        self.sink = Some(sink);
        self.spawn_ticker();
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
        self.sink = None;
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Period of the running ticker.
    pub fn period(&self) -> Option<Duration> {
        self.ticker.period()
    }

    fn spawn_ticker(&mut self) {
        let Some(sink) = self.sink.clone() else {
            return;
        };
        let settings = Arc::clone(&self.settings);
        let clock = self.clock;
        let period = Duration::from_secs(settings.refresh);
        tracing::debug!(refresh = settings.refresh, "starting board ticker");

        self.ticker.start(period, move || {
            let board = Dashboard::compute(clock(), &settings, &mut rand::thread_rng());
            if sink.send(board).is_err() {
                tracing::debug!("dashboard receiver dropped, skipping render");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tokio::sync::mpsc;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 8)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap()
    }

    fn today() -> NaiveDate {
        fixed_now().date()
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn open_on_empty_store_uses_defaults() {
        let board = Board::open_on(MemoryStore::new(), today());
        assert_eq!(*board.settings(), Settings::defaults_on(today()));
        assert!(!board.is_running());
    }

    #[test]
    fn save_swaps_snapshot_without_touching_old_one() {
        let mut board = Board::open_on(MemoryStore::new(), today());
        let before = board.settings();
        let mut next = (*before).clone();
        next.end = "17:00".parse().unwrap();
        let after = board.save(next).unwrap();

        assert_eq!(before.end.to_string(), "18:00");
        assert_eq!(after.end.to_string(), "17:00");
        let reloaded = Board::open_on(MemoryStore::new(), today());
        assert_eq!(reloaded.settings().end.to_string(), "18:00");
        assert_eq!(
            crate::storage::load_settings_on(board.store(), today()).end.to_string(),
            "17:00"
        );
    }

    #[test]
    fn render_reflects_current_snapshot() {
        let mut board = Board::open_on(MemoryStore::new(), today());
        let mut rng = rand::thread_rng();
        assert_eq!(board.render(fixed_now(), &mut rng).workday.percent, 50.0);

        let mut next = (*board.settings()).clone();
        next.start = "13:30".parse().unwrap();
        board.save(next).unwrap();
        assert_eq!(board.render(fixed_now(), &mut rng).workday.percent, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_render_into_sink() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut board = Board::open_on(MemoryStore::new(), today()).with_clock(fixed_now);
        board.start(tx);
        settle().await;

        let first = rx.try_recv().unwrap();
        assert_eq!(first.now, fixed_now());
        assert_eq!(first.workday.remaining, "0天4小时30分钟");
        assert_eq!(board.period(), Some(Duration::from_secs(60)));

        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn save_replaces_ticker_with_new_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut board = Board::open_on(MemoryStore::new(), today()).with_clock(fixed_now);
        board.start(tx);
        settle().await;
        let _ = rx.try_recv();

        let mut next = (*board.settings()).clone();
        next.refresh = 10;
        next.dark = crate::settings::DarkMode::On;
        board.save(next).unwrap();
        settle().await;
        assert_eq!(board.period(), Some(Duration::from_secs(10)));
        // Replacement renders immediately with the new snapshot.
        assert!(rx.try_recv().unwrap().dark);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_rendering() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut board = Board::open_on(MemoryStore::new(), today()).with_clock(fixed_now);
        board.start(tx);
        settle().await;
        board.stop();
        let _ = rx.try_recv();

        tokio::time::advance(Duration::from_secs(120)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert!(!board.is_running());
    }

    #[test]
    fn save_while_stopped_does_not_start() {
        let mut board = Board::open_on(MemoryStore::new(), today());
        board.save(Settings::defaults_on(today())).unwrap();
        assert!(!board.is_running());
    }
}
