use chrono::{Datelike, NaiveDate};

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Julian Day Number of a proleptic Gregorian date.
///
/// The result is integer-valued and refers to noon UT of that date.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    jdn as f64
}

/// Julian Day Number of a `NaiveDate`.
pub fn julian_day_for(date: NaiveDate) -> f64 {
    julian_day(date.year(), date.month(), date.day())
}
