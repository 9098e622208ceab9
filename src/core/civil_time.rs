use crate::domain::model::{BirthInput, Instant};
use crate::utils::error::{OracleError, Result};
use crate::utils::validation::{validate_coordinate, Validate};
use chrono::{Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

pub fn resolve_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| OracleError::InvalidTimezone {
            name: name.to_string(),
        })
}

/// Splits a fractional hour into whole hour and rounded minute.
///
/// The minute may come back as 60 (e.g. 13.9999); callers add it as a
/// duration so it carries into the next hour.
pub fn split_hour(hour: f64) -> Result<(u32, u32)> {
    if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
        return Err(OracleError::invalid_time(format!(
            "hour {} is outside [0, 24)",
            hour
        )));
    }
    let whole = hour.floor();
    let minute = ((hour - whole) * 60.0).round();
    Ok((whole as u32, minute as u32))
}

fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(OracleError::invalid_time(format!(
            "year {} is outside {}..={}",
            year, MIN_YEAR, MAX_YEAR
        )));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        OracleError::invalid_time(format!(
            "{:04}-{:02}-{:02} is not a valid calendar date",
            year, month, day
        ))
    })
}

/// Builds the local wall-clock time for the birth data, without a zone.
pub fn local_datetime(input: &BirthInput) -> Result<NaiveDateTime> {
    let (hour, minute) = split_hour(input.hour)?;
    let date = calendar_date(input.year, input.month, input.day)?;
    let start_of_hour = date
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| OracleError::invalid_time(format!("hour {} is not valid", hour)))?;
    Ok(start_of_hour + Duration::minutes(i64::from(minute)))
}

/// Interprets a wall-clock time in `tz` and returns the UTC instant.
///
/// Folded times (clocks set back) resolve to the earlier instant. Times inside
/// a spring-forward gap use the offset in force before the gap, which lands
/// them just after the transition.
pub fn local_to_utc(tz: &Tz, local: NaiveDateTime) -> Instant {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(first, second) => {
            tracing::debug!("Ambiguous local time {} in {}, using earliest", local, tz);
            first.min(second).with_timezone(&Utc)
        }
        LocalResult::None => {
            let before_gap = tz
                .offset_from_utc_datetime(&(local - Duration::days(1)))
                .fix();
            let utc = local - Duration::seconds(i64::from(before_gap.local_minus_utc()));
            tracing::warn!(
                "⚠️ Local time {} does not exist in {} (DST gap), shifting forward",
                local,
                tz
            );
            Utc.from_utc_datetime(&utc)
        }
    }
}

/// Civil-time normalizer: birth data -> absolute UTC instant.
pub fn to_utc(input: &BirthInput) -> Result<Instant> {
    let tz = resolve_timezone(&input.timezone)?;
    let local = local_datetime(input)?;
    let instant = local_to_utc(&tz, local);
    tracing::debug!("Normalized {} {} -> {}", local, tz, instant);
    Ok(instant)
}

impl Validate for BirthInput {
    fn validate(&self) -> Result<()> {
        resolve_timezone(&self.timezone)?;
        split_hour(self.hour)?;
        calendar_date(self.year, self.month, self.day)?;
        validate_coordinate("lat", self.latitude, 90.0)?;
        validate_coordinate("lon", self.longitude, 180.0)?;
        Ok(())
    }
}
