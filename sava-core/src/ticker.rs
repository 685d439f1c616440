//! Periodic countdown refresh bound to the lifetime of its owner.
//!
//! A [`CountdownTicker`] evaluates the countdown once when it is started and
//! then again every `period`. Whoever holds the ticker holds the only handle
//! to the refresh task: dropping the ticker aborts the task, whether the
//! owner went away normally, returned early with `?`, or unwound.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::countdown::CountdownState;
use crate::error::{Result, SavaError};
use crate::target::TargetInstant;

/// One hour, the refresh cadence of the reservation counter
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(60 * 60);

pub struct CountdownTicker {
    target: TargetInstant,
    period: Duration,
    receiver: watch::Receiver<CountdownState>,
    handle: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Evaluate now and start refreshing every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(target: TargetInstant, clock: Arc<dyn Clock>, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(SavaError::invalid_interval(
                "refresh period must be greater than zero",
            ));
        }
        let runtime = Handle::try_current().map_err(|err| SavaError::runtime(err.to_string()))?;
        let first_tick = Instant::now().checked_add(period).ok_or_else(|| {
            SavaError::invalid_interval(format!("refresh period of {}s is too large", period.as_secs()))
        })?;

        let initial = CountdownState::evaluate(&target, clock.now());
        let (sender, receiver) = watch::channel(initial);
        let handle = runtime.spawn(refresh_loop(target, clock, first_tick, period, sender));

        info!(
            target_instant = %target.instant(),
            period_secs = period.as_secs(),
            remaining = %initial.remaining(),
            "countdown ticker started"
        );

        Ok(Self {
            target,
            period,
            receiver,
            handle: Some(handle),
        })
    }

    /// Latest published state
    pub fn current(&self) -> CountdownState {
        *self.receiver.borrow()
    }

    /// Receiver that wakes on every refresh and closes on teardown
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.receiver.clone()
    }

    pub fn target(&self) -> &TargetInstant {
        &self.target
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Tear down and wait until the refresh task is gone.
    pub async fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            // Cancellation is the expected outcome here
            let _ = handle.await;
            info!("countdown ticker stopped");
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("countdown ticker released");
        }
    }
}

async fn refresh_loop(
    target: TargetInstant,
    clock: Arc<dyn Clock>,
    first_tick: Instant,
    period: Duration,
    sender: watch::Sender<CountdownState>,
) {
    // First evaluation already happened in `start`
    let mut ticks = time::interval_at(first_tick, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;
        let state = CountdownState::evaluate(&target, clock.now());
        debug!(state = state.label(), remaining = %state.remaining(), "countdown refreshed");

        if sender.send(state).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::countdown::RemainingDuration;
    use crate::target::TargetZone;
    use chrono::{NaiveDateTime, TimeDelta};

    const HOUR: Duration = Duration::from_secs(3600);

    fn target() -> TargetInstant {
        TargetInstant::parse("2026-07-04T00:00:00", TargetZone::Utc).unwrap()
    }

    fn clock_at(literal: &str) -> ManualClock {
        ManualClock::new(literal.parse::<NaiveDateTime>().unwrap().and_utc())
    }

    fn pending(months: u32, days: u32, hours: u32) -> CountdownState {
        CountdownState::Pending(RemainingDuration {
            months,
            days,
            hours,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn evaluates_immediately_on_start() {
        let clock = clock_at("2026-07-03T00:00:00");
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()), HOUR).unwrap();

        assert_eq!(ticker.current(), pending(0, 1, 0));
        assert_eq!(clock.reads(), 1);
        assert!(ticker.is_running());
        assert_eq!(ticker.period(), HOUR);
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_every_period() {
        let clock = clock_at("2026-07-03T00:00:00");
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()), HOUR).unwrap();
        let mut updates = ticker.subscribe();

        clock.advance(TimeDelta::hours(1));
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), pending(0, 0, 23));

        clock.advance(TimeDelta::hours(1));
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), pending(0, 0, 22));

        assert_eq!(clock.reads(), 3);
        assert_eq!(ticker.current(), pending(0, 0, 22));
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_reached_once_target_passes() {
        let clock = clock_at("2026-07-03T23:30:00");
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()), HOUR).unwrap();
        assert_eq!(ticker.current(), CountdownState::Pending(RemainingDuration::ZERO));

        let mut updates = ticker.subscribe();
        clock.advance(TimeDelta::hours(1));
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow(), CountdownState::Reached);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_releases_the_timer() {
        let clock = clock_at("2026-07-01T00:00:00");
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()), HOUR).unwrap();
        let mut updates = ticker.subscribe();

        updates.changed().await.unwrap();
        assert_eq!(clock.reads(), 2);

        drop(ticker);
        time::sleep(HOUR * 5).await;

        assert_eq!(clock.reads(), 2);
        assert!(updates.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn early_return_releases_the_timer() {
        fn mount_then_fail(clock: &ManualClock) -> Result<CountdownTicker> {
            let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()), HOUR)?;
            assert!(ticker.is_running());
            Err(SavaError::config("view failed to render"))
        }

        let clock = clock_at("2026-07-01T00:00:00");
        assert!(mount_then_fail(&clock).is_err());

        time::sleep(HOUR * 3).await;
        assert_eq!(clock.reads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_waits_for_teardown() {
        let clock = clock_at("2026-07-01T00:00:00");
        let ticker = CountdownTicker::start(target(), Arc::new(clock.clone()), HOUR).unwrap();
        let mut updates = ticker.subscribe();

        ticker.stop().await;

        assert!(updates.changed().await.is_err());
        time::sleep(HOUR * 2).await;
        assert_eq!(clock.reads(), 1);
    }

    #[test]
    fn zero_period_is_rejected() {
        let clock = clock_at("2026-07-01T00:00:00");
        let result = CountdownTicker::start(target(), Arc::new(clock), Duration::ZERO);
        assert!(matches!(result, Err(SavaError::InvalidInterval { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn unrepresentable_period_is_rejected() {
        let clock = clock_at("2026-07-01T00:00:00");
        let result =
            CountdownTicker::start(target(), Arc::new(clock.clone()), Duration::from_secs(u64::MAX));

        assert!(matches!(result, Err(SavaError::InvalidInterval { .. })));
        assert_eq!(clock.reads(), 0);
    }

    #[test]
    fn start_outside_runtime_fails_cleanly() {
        let clock = clock_at("2026-07-01T00:00:00");
        let result = CountdownTicker::start(target(), Arc::new(clock.clone()), HOUR);
        assert!(matches!(result, Err(SavaError::Runtime { .. })));
        assert_eq!(clock.reads(), 0);
    }
}
