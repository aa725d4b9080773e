//! Whole-day durations.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// The elapsed time between two dates, as a signed count of whole days.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i32);

/// One day.
pub const DAY: Duration = Duration::DAY;

/// Seven days.
pub const WEEK: Duration = Duration::WEEK;

impl Duration {
    /// One day.
    pub const DAY: Duration = Duration(1);

    /// Seven days.
    pub const WEEK: Duration = Duration(7);

    /// No elapsed time.
    pub const ZERO: Duration = Duration(0);

    /// Creates a duration of `days` days.
    pub const fn days(days: i32) -> Duration {
        Duration(days)
    }

    /// Creates a duration of `weeks` weeks.
    ///
    /// # Panics
    ///
    /// Panics if the day count overflows `i32`.
    pub const fn weeks(weeks: i32) -> Duration {
        Duration(weeks * 7)
    }

    /// Returns the number of days.
    pub const fn as_days(self) -> i32 {
        self.0
    }

    /// Reports whether the duration moves backward in time.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for Duration {
    fn from(days: i32) -> Duration {
        Duration(days)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Mul<i32> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i32) -> Duration {
        Duration(self.0 * rhs)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.unsigned_abs() == 1 {
            write!(f, "{} day", self.0)
        } else {
            write!(f, "{} days", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(DAY.as_days(), 1);
        assert_eq!(WEEK.as_days(), 7);
        assert_eq!(Duration::weeks(3), WEEK * 3);
        assert_eq!(Duration::default(), Duration::ZERO);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(WEEK - DAY, Duration::days(6));
        assert_eq!(WEEK + DAY, Duration::days(8));
        assert_eq!(-WEEK, Duration::days(-7));
        assert!((-DAY).is_negative());
        assert!(!Duration::ZERO.is_negative());
    }

    #[test]
    fn covers_i32_range() {
        assert_eq!(Duration::days(i32::MAX).as_days(), i32::MAX);
        assert_eq!(Duration::days(i32::MIN).as_days(), i32::MIN);
    }

    #[test]
    fn display() {
        assert_eq!(DAY.to_string(), "1 day");
        assert_eq!((-DAY).to_string(), "-1 day");
        assert_eq!(WEEK.to_string(), "7 days");
        assert_eq!(Duration::ZERO.to_string(), "0 days");
    }
}
