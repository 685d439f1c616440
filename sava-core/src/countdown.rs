//! Months / days / hours remaining until a [`TargetInstant`].
//!
//! Months are a flat 30 days, not calendar months. Once the target has been
//! reached every field is zero; [`CountdownState`] tells the two cases apart.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::target::TargetInstant;

pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const DAYS_PER_MONTH: i64 = 30;

/// Whole months, days and hours left on the countdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub months: u32,
    pub days: u32,
    pub hours: u32,
}

impl RemainingDuration {
    pub const ZERO: Self = Self {
        months: 0,
        days: 0,
        hours: 0,
    };

    /// Break a signed millisecond difference into months, days and hours.
    ///
    /// Non-positive differences clamp to [`RemainingDuration::ZERO`].
    pub fn from_millis(difference: i64) -> Self {
        if difference <= 0 {
            return Self::ZERO;
        }

        let total_days = difference / MS_PER_DAY;
        let months = total_days / DAYS_PER_MONTH;
        let days = total_days % DAYS_PER_MONTH;
        let hours = (difference % MS_PER_DAY) / MS_PER_HOUR;

        Self {
            months: u32::try_from(months).unwrap_or(u32::MAX),
            days: days as u32,
            hours: hours as u32,
        }
    }

    /// Hours represented by this value, counting a month as 30 days
    pub fn total_hours(&self) -> u64 {
        let days = u64::from(self.months) * DAYS_PER_MONTH as u64 + u64::from(self.days);
        days * 24 + u64::from(self.hours)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.months, self.days, self.hours)
    }
}

/// Compute the time left from `now` until `target`.
///
/// Pure and total: any `now`, including one past the target, yields a value.
pub fn compute_remaining(target: &TargetInstant, now: DateTime<Utc>) -> RemainingDuration {
    let difference = target
        .instant()
        .signed_duration_since(now)
        .num_milliseconds();
    RemainingDuration::from_millis(difference)
}

/// What the countdown should display at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Target still ahead; may be all-zero in its final hour
    Pending(RemainingDuration),
    /// `now` is at or past the target
    Reached,
}

impl CountdownState {
    pub fn evaluate(target: &TargetInstant, now: DateTime<Utc>) -> Self {
        if now >= target.instant() {
            CountdownState::Reached
        } else {
            CountdownState::Pending(compute_remaining(target, now))
        }
    }

    pub fn remaining(&self) -> RemainingDuration {
        match self {
            CountdownState::Pending(remaining) => *remaining,
            CountdownState::Reached => RemainingDuration::ZERO,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, CountdownState::Reached)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CountdownState::Pending(_) => "pending",
            CountdownState::Reached => "reached",
        }
    }
}
