use crate::domain::model::{Instant, JulianDay};
use chrono::{Datelike, Timelike};

/// Julian Day for a proleptic Gregorian calendar date.
///
/// `hour` is the fractional hour of the UT day.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, hour: f64) -> JulianDay {
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    let jd = (365.25 * (y + 4716) as f64).floor()
        + (30.6001 * (m + 1) as f64).floor()
        + f64::from(day)
        + b as f64
        - 1524.5
        + hour / 24.0;

    JulianDay(jd)
}

/// Julian Day (UT) of a UTC instant.
pub fn julian_day(instant: &Instant) -> JulianDay {
    let seconds =
        f64::from(instant.second()) + f64::from(instant.nanosecond().min(999_999_999)) / 1e9;
    let hour = f64::from(instant.hour()) + f64::from(instant.minute()) / 60.0 + seconds / 3600.0;

    calendar_to_jd(instant.year(), instant.month(), instant.day(), hour)
}
