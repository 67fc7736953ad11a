//! `DateSpan` — an inclusive range of calendar dates, and the month- and
//! year-relative range constructors.

use crate::date::Date;

/// An inclusive range of calendar dates.
///
/// Every constructor in this crate produces a span with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateSpan {
    /// First day of the span.
    pub start: Date,
    /// Last day of the span (inclusive).
    pub end: Date,
}

impl DateSpan {
    /// Create a span from a start and end date (both inclusive).
    pub fn new(start: Date, end: Date) -> Self {
        DateSpan { start, end }
    }

    /// Return the number of days in the span, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        self.end - self.start + 1
    }

    /// Return `true` if `date` falls within the span.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    // ── Month-relative spans ──────────────────────────────────────────────────

    /// The month containing `date`, up to and including `date`.
    pub fn month_to_date(date: Date) -> Self {
        DateSpan::new(date.start_of_month(), date)
    }

    /// The whole month containing `date`.
    pub fn full_month(date: Date) -> Self {
        DateSpan::new(date.start_of_month(), date.first_of_next_month() - 1)
    }

    /// The whole month before the one containing `date`, rolling into
    /// December of the prior year from January.
    pub fn prev_month(date: Date) -> Self {
        let start = Date::new(date.year(), i32::from(date.month()) - 1, 1);
        DateSpan::new(start, start.end_of_month())
    }

    /// The previous month up to `date`'s day-of-month.
    ///
    /// When the previous month is shorter than `date`'s day-of-month (the
    /// constructed date's day overflows back into the current month), there
    /// is no meaningful "same day" and the whole previous month is returned
    /// instead.
    pub fn prev_month_to_date(date: Date) -> Self {
        let prev = Date::new(
            date.year(),
            i32::from(date.month()) - 1,
            i32::from(date.day()),
        );
        if prev.month() == date.month() {
            return Self::prev_month(date);
        }
        Self::month_to_date(prev)
    }

    // ── Year-relative spans ───────────────────────────────────────────────────

    /// The year containing `date`, from January 1 up to and including
    /// `date`.
    pub fn year_to_date(date: Date) -> Self {
        DateSpan::new(Date::new(date.year(), 1, 1), date)
    }

    /// January 1 of the previous year through `date`'s month and day in the
    /// previous year.
    ///
    /// A February 29 reference in a non-leap previous year would roll to
    /// March 1; the end is pulled back one day to February 28 instead.
    pub fn previous_year_to_date(date: Date) -> Self {
        let start = Date::new(date.year() - 1, 1, 1);
        let mut end = Date::new(
            date.year() - 1,
            i32::from(date.month()),
            i32::from(date.day()),
        );
        if end.month() != date.month() {
            end = end - 1;
        }
        DateSpan::new(start, end)
    }

    /// The same month-to-date span one year earlier, with the same
    /// February 29 pullback as [`DateSpan::previous_year_to_date`].
    pub fn prev_year_month_to_date(date: Date) -> Self {
        let mut end = Date::new(
            date.year() - 1,
            i32::from(date.month()),
            i32::from(date.day()),
        );
        if end.month() != date.month() {
            end = end - 1;
        }
        DateSpan::new(end.start_of_month(), end)
    }
}
