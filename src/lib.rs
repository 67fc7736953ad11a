//! # datespan
//!
//! Day-precision calendar date spans and US holiday dates for reporting
//! periods.
//!
//! Given a reference date, this crate derives canonical date ranges (last
//! full week, month-to-date, previous month, year-to-date, and their
//! previous-year counterparts) and fixed or floating US holiday dates.
//! Everything is truncated to day granularity: there is no time-of-day and
//! no timezone, so "period boundary" answers do not drift with wall-clock
//! time.
//!
//! ```
//! use datespan::{Date, DateSpan, Week};
//!
//! let today = Date::new(2024, 2, 5);
//! let week = Week::default(); // Monday–Sunday
//!
//! let last_week = week.last_full_week(today);
//! assert_eq!(last_week.start, Date::new(2024, 1, 29));
//! assert_eq!(last_week.end, Date::new(2024, 2, 4));
//!
//! let mtd = DateSpan::month_to_date(today);
//! assert_eq!(mtd.start, Date::new(2024, 2, 1));
//! ```
//!
//! Every operation is a pure function of its inputs: no global state, no
//! I/O, no failure paths. Out-of-range month/day inputs are normalized per
//! the Gregorian calendar (see [`Date::new`]) rather than rejected.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and the calendar-normalization primitive.
pub mod date;

/// US holiday date functions.
pub mod holidays;

/// `DateSpan` and month-/year-relative range constructors.
pub mod span;

/// `Week` configuration and week-relative ranges.
pub mod week;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use span::DateSpan;
pub use week::{Week, DEFAULT_WEEK_END, DEFAULT_WEEK_START};
pub use weekday::{ParseWeekdayError, Weekday};
