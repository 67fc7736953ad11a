//! US holiday dates.
//!
//! Each function takes a reference date, reads only its year, and returns
//! the holiday's calendar date in that year:
//! * New Year's Day (Jan 1)
//! * Martin Luther King Jr. Day (3rd Monday in January)
//! * Memorial Day (last Monday on or before June 1)
//! * Juneteenth (Jun 19)
//! * Independence Day (Jul 4)
//! * Labor Day (1st Monday in September)
//! * Veterans Day (Nov 11)
//! * New Year's Eve (Dec 31)
//!
//! All functions are total over any year reachable through [`Date::new`].

use crate::date::Date;
use crate::weekday::Weekday;

/// New Year's Day: January 1.
pub fn new_years_day(date: Date) -> Date {
    Date::new(date.year(), 1, 1)
}

/// New Year's Eve: December 31.
pub fn new_years_eve(date: Date) -> Date {
    Date::new(date.year(), 12, 31)
}

/// Martin Luther King Jr. Day: the third Monday of January.
pub fn martin_luther_king_jr_day(date: Date) -> Date {
    Date::nth_weekday(3, Weekday::Monday, date.year(), 1)
}

/// Memorial Day: the last Monday on or before June 1.
///
/// The June 1 anchor means a June 1 that falls on a Monday is returned
/// as-is; for every other year this is the last Monday of May.
pub fn memorial_day(date: Date) -> Date {
    Date::new(date.year(), 6, 1).previous_or_same(Weekday::Monday)
}

/// Juneteenth: June 19.
pub fn juneteenth(date: Date) -> Date {
    Date::new(date.year(), 6, 19)
}

/// Independence Day: July 4.
pub fn independence_day(date: Date) -> Date {
    Date::new(date.year(), 7, 4)
}

/// Labor Day: the first Monday of September.
pub fn labor_day(date: Date) -> Date {
    Date::nth_weekday(1, Weekday::Monday, date.year(), 9)
}

/// Veterans Day: November 11.
pub fn veterans_day(date: Date) -> Date {
    Date::new(date.year(), 11, 11)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_dates_use_only_the_year() {
        let d = Date::new(2024, 8, 7);
        assert_eq!(new_years_day(d), Date::new(2024, 1, 1));
        assert_eq!(new_years_eve(d), Date::new(2024, 12, 31));
        assert_eq!(juneteenth(d), Date::new(2024, 6, 19));
        assert_eq!(independence_day(d), Date::new(2024, 7, 4));
        assert_eq!(veterans_day(d), Date::new(2024, 11, 11));
    }

    #[test]
    fn mlk_day_2024() {
        assert_eq!(
            martin_luther_king_jr_day(Date::new(2024, 3, 20)),
            Date::new(2024, 1, 15)
        );
    }

    #[test]
    fn memorial_day_2024() {
        assert_eq!(memorial_day(Date::new(2024, 3, 20)), Date::new(2024, 5, 27));
    }

    #[test]
    fn labor_day_2024() {
        assert_eq!(labor_day(Date::new(2024, 3, 20)), Date::new(2024, 9, 2));
    }

    #[test]
    fn floating_holidays_land_on_monday() {
        for year in 1990..2060 {
            let d = Date::new(year, 7, 1);
            assert_eq!(martin_luther_king_jr_day(d).weekday(), Weekday::Monday);
            assert_eq!(memorial_day(d).weekday(), Weekday::Monday);
            assert_eq!(labor_day(d).weekday(), Weekday::Monday);
        }
    }
}
