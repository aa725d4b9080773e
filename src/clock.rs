//! Time sources for [`Date::today_with`](crate::Date::today_with).

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use tracing::trace;

/// Provides the current instant.
///
/// The offset of the returned instant decides which calendar day "today" is,
/// so implementations choose the time zone. Tests use [`FixedClock`] to stay
/// independent of wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The operating system clock, read in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now().fixed_offset();
        trace!(%now, "sampled system clock");
        now
    }
}

/// A clock stopped at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock that always reports `now`, keeping its offset.
    pub fn new<Tz: TimeZone>(now: DateTime<Tz>) -> Self {
        Self {
            now: now.fixed_offset(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn fixed_clock_returns_given_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 10, 2, 12, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn fixed_clock_keeps_offset() {
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = west.with_ymd_and_hms(2024, 1, 15, 22, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now().offset(), &west);
    }

    #[test]
    fn clock_trait_object_works() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(instant));
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn system_clock_is_recent() {
        let now = SystemClock.now().with_timezone(&Utc);
        let cutoff = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(now > cutoff);
    }
}
