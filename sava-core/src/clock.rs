//! Wall-clock source for countdown evaluation

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

/// Anything that can tell the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock that also counts how often it was read.
///
/// Clones share the same instant and counter, so a test can keep one handle
/// while the ticker owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<Utc>>>,
    reads: Arc<AtomicUsize>,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(at)),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += by;
    }

    /// Number of times [`Clock::now`] has been called
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_counts_reads_across_clones() {
        let start = DateTime::from_timestamp(1_760_000_000, 0).unwrap();
        let clock = ManualClock::new(start);
        let shared = clock.clone();

        assert_eq!(shared.now(), start);
        clock.advance(TimeDelta::hours(2));
        assert_eq!(shared.now(), start + TimeDelta::hours(2));
        assert_eq!(clock.reads(), 2);

        clock.set(start);
        assert_eq!(clock.now(), start);
        assert_eq!(shared.reads(), 3);
    }

    #[test]
    fn system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
