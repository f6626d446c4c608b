//! Display Formatting
//!
//! Text shown by the widgets, kept apart from the views so it can be tested
//! natively.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, TimeZone};

/// "12/30"
pub fn fraction(current: u32, target: impl Display) -> String {
    format!("{}/{}", current, target)
}

/// "27 days left until July 2025"
pub fn days_left_label(days: i64, end_date: NaiveDate) -> String {
    format!("{} days left until {}", days, end_date.format("%B %Y"))
}

/// "Jul 5"
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%b %-d").to_string()
}

/// "7/5/2025 at 3:04:05 PM"
pub fn contact_timestamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%-m/%-d/%Y at %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_fraction_and_days_left() {
        assert_eq!(fraction(12, 30), "12/30");
        let end = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(days_left_label(27, end), "27 days left until July 2025");
        assert_eq!(days_left_label(-3, end), "-3 days left until July 2025");
    }

    #[test]
    fn test_dates() {
        let offset = FixedOffset::west_opt(4 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2025, 7, 5, 15, 4, 5).unwrap();
        assert_eq!(short_date(&date), "Jul 5");
        assert_eq!(contact_timestamp(&date), "7/5/2025 at 3:04:05 PM");

        let morning = offset.with_ymd_and_hms(2025, 12, 25, 9, 30, 0).unwrap();
        assert_eq!(contact_timestamp(&morning), "12/25/2025 at 9:30:00 AM");
    }
}
