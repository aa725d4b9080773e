//! Date sequence generation.

use tracing::trace;

use crate::date::Date;
use crate::duration::{Duration, DAY};

/// An iterator over evenly spaced dates.
///
/// Created by [`Date::series`]. It ends when the next date would leave the
/// supported range; a zero step repeats the start date forever.
#[derive(Debug, Clone)]
pub struct DateSeries {
    next: Option<Date>,
    step: Duration,
}

impl DateSeries {
    pub(crate) fn new(start: Date, step: Duration) -> Self {
        Self {
            next: Some(start),
            step,
        }
    }
}

impl Iterator for DateSeries {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = match current.checked_add(self.step) {
            Ok(date) => Some(date),
            Err(err) => {
                trace!(%err, "date series reached the edge of the supported range");
                None
            }
        };
        Some(current)
    }
}

impl std::iter::FusedIterator for DateSeries {}

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces `n_days` consecutive dates. Month and
/// year boundaries, including February 29, are handled by the calendar. The
/// sequence is shorter than `n_days` only if it runs into [`Date::MAX`].
///
/// # Example
///
/// ```
/// use isodate::{date_sequence, Date, Month};
///
/// let start = Date::new(2020, Month::February, 28);
/// let dates = date_sequence(start, 3);
/// assert_eq!(dates[1], Date::new(2020, Month::February, 29));
/// assert_eq!(dates[2], Date::new(2020, Month::March, 1));
/// ```
pub fn date_sequence(start: Date, n_days: usize) -> Vec<Date> {
    start.series(DAY).take(n_days).collect()
}
