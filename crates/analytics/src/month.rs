//! Calendar-month arithmetic and labeling
//!
//! Cohorts are identified by the calendar month of registration, so all
//! bucketing compares month identity rather than instant intervals; an
//! instant anywhere inside a month, including its final sub-second, lands in
//! that month's bucket.

use chrono::{DateTime, Utc};

use retain_store::YearMonth;

/// English month name, as rendered in table and chart labels
pub fn month_name(ym: YearMonth) -> &'static str {
    match ym.month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// The month `n` calendar months before the month containing `at`
///
/// `months_back(now, 0)` is the current month.
pub fn months_back(at: DateTime<Utc>, n: u32) -> YearMonth {
    let current = YearMonth::from_datetime(at);
    let total = current.year as i64 * 12 + (current.month as i64 - 1) - n as i64;
    YearMonth::new((total.div_euclid(12)) as i32, (total.rem_euclid(12) + 1) as u32)
}
