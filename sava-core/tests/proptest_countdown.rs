use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;
use sava_core::countdown::{MS_PER_DAY, MS_PER_HOUR};
use sava_core::{compute_remaining, CountdownState, RemainingDuration, TargetInstant, TargetZone};

fn target() -> TargetInstant {
    TargetInstant::parse("2026-07-04T00:00:00", TargetZone::Utc).unwrap()
}

/// Roughly ten years either side of the target, in milliseconds
const SPAN_MS: i64 = 10 * 366 * MS_PER_DAY;

fn offset(ms: i64) -> DateTime<Utc> {
    target().instant() - TimeDelta::milliseconds(ms)
}

proptest! {
    /// Property: any `now` before the target yields a pending countdown whose
    /// reconstructed hours never overshoot the real difference
    #[test]
    fn prop_before_target_is_pending_and_bounded(ms in 1..SPAN_MS) {
        let state = CountdownState::evaluate(&target(), offset(ms));
        let remaining = state.remaining();

        prop_assert!(!state.is_reached());
        prop_assert!(remaining.days < 30);
        prop_assert!(remaining.hours < 24);

        let hours = remaining.total_hours() as i64;
        prop_assert!(hours * MS_PER_HOUR <= ms);
        prop_assert!(ms < (hours + 1) * MS_PER_HOUR);
    }

    /// Property: moving `now` toward the target never increases what is left
    #[test]
    fn prop_monotonic_toward_target(a in 0..SPAN_MS, b in 0..SPAN_MS) {
        let (earlier, later) = if a >= b { (a, b) } else { (b, a) };
        let first = compute_remaining(&target(), offset(earlier));
        let second = compute_remaining(&target(), offset(later));
        prop_assert!(first.total_hours() >= second.total_hours());
    }

    /// Property: at or after the target every field is zero
    #[test]
    fn prop_after_target_is_zero(ms in 0..SPAN_MS) {
        let now = target().instant() + TimeDelta::milliseconds(ms);
        prop_assert_eq!(compute_remaining(&target(), now), RemainingDuration::ZERO);
        prop_assert_eq!(CountdownState::evaluate(&target(), now), CountdownState::Reached);
    }

    /// Property: evaluation is a pure function of its inputs
    #[test]
    fn prop_idempotent(ms in -SPAN_MS..SPAN_MS) {
        let now = offset(ms);
        prop_assert_eq!(compute_remaining(&target(), now), compute_remaining(&target(), now));
    }

    /// Property: whole-day offsets land exactly on months/days with no hours
    #[test]
    fn prop_whole_days_split_into_thirty_day_months(days in 1i64..3000) {
        let remaining = compute_remaining(&target(), target().instant() - TimeDelta::days(days));
        prop_assert_eq!(remaining.hours, 0);
        prop_assert_eq!(i64::from(remaining.months), days / 30);
        prop_assert_eq!(i64::from(remaining.days), days % 30);
    }
}

#[test]
fn documented_boundaries() {
    let twelve_hours = compute_remaining(&target(), offset(12 * MS_PER_HOUR));
    assert_eq!(
        twelve_hours,
        RemainingDuration {
            months: 0,
            days: 0,
            hours: 12
        }
    );

    let sixty_one_days = compute_remaining(&target(), offset(61 * MS_PER_DAY));
    assert_eq!(
        sixty_one_days,
        RemainingDuration {
            months: 2,
            days: 1,
            hours: 0
        }
    );

    assert_eq!(
        compute_remaining(&target(), target().instant()),
        RemainingDuration::ZERO
    );
}
