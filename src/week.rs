//! `Week` — week-boundary configuration and week-relative ranges.
//!
//! A `Week` names the weekday a week starts on and the weekday it ends on
//! (default Monday–Sunday). Every week-relative range computation takes the
//! configuration explicitly; there is no hidden global week definition.

use tracing::warn;

use crate::date::Date;
use crate::span::DateSpan;
use crate::weekday::Weekday;

/// Default weekday on which a week starts.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Monday;

/// Default weekday on which a week ends.
pub const DEFAULT_WEEK_END: Weekday = Weekday::Sunday;

/// An immutable week-boundary configuration.
///
/// The pair must denote exactly 7 consecutive days, i.e. the end weekday
/// immediately precedes the start weekday in calendar order. Construction
/// never fails: an invalid pair degrades to the Monday–Sunday default with a
/// diagnostic warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    start: Weekday,
    end: Weekday,
}

impl Week {
    /// Create a week configuration from a start and end weekday.
    ///
    /// If the pair does not span 7 consecutive days (e.g. Monday–Saturday),
    /// a warning is emitted and the default Monday–Sunday configuration is
    /// returned instead.
    pub fn new(start: Weekday, end: Weekday) -> Self {
        if start.days_since(end) != 1 {
            warn!(
                %start, %end,
                "week endpoints do not span 7 consecutive days, using the default week"
            );
            return Self::default();
        }
        Week { start, end }
    }

    /// Return the weekday this week starts on.
    pub fn start(&self) -> Weekday {
        self.start
    }

    /// Return the weekday this week ends on.
    pub fn end(&self) -> Weekday {
        self.end
    }

    /// Return the start of the week containing `date`: the most recent day
    /// on or before `date` whose weekday is the configured start.
    pub fn start_of_week(&self, date: Date) -> Date {
        date.previous_or_same(self.start)
    }

    /// Return the last full week before the week containing `date`.
    pub fn last_full_week(&self, date: Date) -> DateSpan {
        let start = self.start_of_week(date) - 7;
        DateSpan::new(start, start + 6)
    }

    /// Return the week before the last full week (two weeks back from the
    /// start of the week containing `date`).
    pub fn prior_last_full_week(&self, date: Date) -> DateSpan {
        let start = self.last_full_week(date).start - 7;
        DateSpan::new(start, start + 6)
    }

    /// Return the week one year before the last full week.
    ///
    /// The start is found by stepping back 363 days from the last full
    /// week's start and re-aligning to the week start. The fixed offset is
    /// an approximation of "same week, one year earlier": it absorbs most
    /// leap-year shifts but can land a week off across some year
    /// boundaries.
    pub fn prev_year_last_full_week(&self, date: Date) -> DateSpan {
        let start = self.start_of_week(self.last_full_week(date).start - 363);
        DateSpan::new(start, start + 6)
    }
}

impl Default for Week {
    /// The Monday–Sunday week.
    fn default() -> Self {
        Week {
            start: DEFAULT_WEEK_START,
            end: DEFAULT_WEEK_END,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pairs_kept() {
        let w = Week::new(Weekday::Sunday, Weekday::Saturday);
        assert_eq!(w.start(), Weekday::Sunday);
        assert_eq!(w.end(), Weekday::Saturday);

        let w = Week::new(Weekday::Friday, Weekday::Thursday);
        assert_eq!(w.start(), Weekday::Friday);
        assert_eq!(w.end(), Weekday::Thursday);
    }

    #[test]
    fn invalid_pairs_fall_back_to_default() {
        // Six-day span
        assert_eq!(Week::new(Weekday::Monday, Weekday::Saturday), Week::default());
        // Reversed order
        assert_eq!(Week::new(Weekday::Sunday, Weekday::Friday), Week::default());
        // Degenerate single-day "week"
        assert_eq!(Week::new(Weekday::Monday, Weekday::Monday), Week::default());
    }

    #[test]
    fn default_is_monday_sunday() {
        let w = Week::default();
        assert_eq!(w.start(), DEFAULT_WEEK_START);
        assert_eq!(w.end(), DEFAULT_WEEK_END);
    }

    #[test]
    fn start_of_week_is_idempotent() {
        let w = Week::default();
        // 2024-02-05 is a Monday
        let d = Date::new(2024, 2, 8);
        let start = w.start_of_week(d);
        assert_eq!(start, Date::new(2024, 2, 5));
        assert_eq!(w.start_of_week(start), start);
    }

    #[test]
    fn start_of_week_crosses_year() {
        let w = Week::default();
        // 2023-01-01 is a Sunday; the Monday on or before it is 2022-12-26.
        assert_eq!(w.start_of_week(Date::new(2023, 1, 1)), Date::new(2022, 12, 26));
    }
}
