//! View state for the reservation card

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use sava_core::{Clock, CountdownState, CountdownTicker, DisplaySection, TargetInstant};
use tokio::sync::watch;
use tracing::warn;

/// The mounted reservation card.
///
/// Owns the countdown ticker, so the refresh timer lives exactly as long as
/// the view does.
pub struct ReservationView {
    ticker: CountdownTicker,
    updates: watch::Receiver<CountdownState>,
    refreshes: u64,
    quit_requested: Arc<AtomicBool>,
    pub state: CountdownState,
    pub display: DisplaySection,
    pub should_quit: bool,
}

impl ReservationView {
    /// Start the ticker and take its first value
    pub fn mount(
        target: TargetInstant,
        clock: Arc<dyn Clock>,
        period: Duration,
        display: DisplaySection,
    ) -> sava_core::Result<Self> {
        let ticker = CountdownTicker::start(target, clock, period)?;
        let updates = ticker.subscribe();
        let state = ticker.current();

        Ok(Self {
            ticker,
            updates,
            refreshes: 0,
            quit_requested: Arc::new(AtomicBool::new(false)),
            state,
            display,
            should_quit: false,
        })
    }

    pub fn target(&self) -> &TargetInstant {
        self.ticker.target()
    }

    /// Number of refreshes picked up since mount
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    /// Flag that asks the view to close from outside the key loop
    pub fn quit_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit_requested)
    }

    /// Pull the latest published value. Returns true when it changed.
    ///
    /// Fails once the refresh task is gone, since the card would freeze.
    pub fn sync(&mut self) -> Result<bool> {
        if self.quit_requested.load(Ordering::SeqCst) {
            self.should_quit = true;
        }

        match self.updates.has_changed() {
            Ok(true) => {
                self.state = *self.updates.borrow_and_update();
                self.refreshes += 1;
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(_) => {
                warn!(refreshes = self.refreshes, "countdown refresh stopped");
                bail!("countdown refresh stopped")
            }
        }
    }

    /// Tear the view down, waiting for the ticker to stop
    pub async fn unmount(self) {
        self.ticker.stop().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeDelta};
    use sava_core::{ManualClock, RemainingDuration, TargetZone};

    const HOUR: Duration = Duration::from_secs(3600);

    fn mount(clock: &ManualClock) -> ReservationView {
        let target = TargetInstant::parse("2026-07-04T00:00:00", TargetZone::Utc).unwrap();
        ReservationView::mount(target, Arc::new(clock.clone()), HOUR, DisplaySection::default())
            .unwrap()
    }

    fn clock_at(literal: &str) -> ManualClock {
        ManualClock::new(literal.parse::<NaiveDateTime>().unwrap().and_utc())
    }

    #[tokio::test(start_paused = true)]
    async fn mount_shows_first_value_without_waiting() {
        let clock = clock_at("2026-07-03T12:00:00");
        let mut view = mount(&clock);

        assert_eq!(
            view.state,
            CountdownState::Pending(RemainingDuration {
                months: 0,
                days: 0,
                hours: 12
            })
        );
        assert!(!view.sync().unwrap());
        assert_eq!(view.refreshes(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn sync_picks_up_hourly_refresh() {
        let clock = clock_at("2026-07-03T12:00:00");
        let mut view = mount(&clock);

        clock.advance(TimeDelta::hours(1));
        tokio::time::sleep(HOUR + Duration::from_secs(1)).await;

        assert!(view.sync().unwrap());
        assert_eq!(view.state.remaining().hours, 11);
        assert_eq!(view.refreshes(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_stops_refreshing() {
        let clock = clock_at("2026-07-03T12:00:00");
        let view = mount(&clock);
        view.unmount().await;

        tokio::time::sleep(HOUR * 4).await;
        assert_eq!(clock.reads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn sync_reports_a_dead_refresh_task() {
        let clock = clock_at("2026-07-03T12:00:00");
        let mut view = mount(&clock);

        let (sender, closed) = watch::channel(view.state);
        drop(sender);
        view.updates = closed;

        let err = view.sync().unwrap_err();
        assert!(err.to_string().contains("countdown refresh stopped"));
    }

    #[tokio::test(start_paused = true)]
    async fn quit_request_closes_the_view() {
        let clock = clock_at("2026-07-03T12:00:00");
        let mut view = mount(&clock);
        assert!(!view.should_quit);

        view.quit_handle().store(true, Ordering::SeqCst);
        assert!(!view.sync().unwrap());
        assert!(view.should_quit);
    }
}
