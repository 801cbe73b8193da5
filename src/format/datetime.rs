//! ru-RU date and time rendering

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};

use crate::config::{date::MONTHS_SHORT, labels};

/// Accepted date-time layouts without an offset, read as local time
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format a serialized timestamp for display in local time
///
/// Renders as `5 янв. 2024 г., 10:30`. Missing or empty input yields `Н/Д`;
/// anything else that does not parse, whitespace included, yields
/// `Invalid Date`. This is a presentation
/// helper and does not validate.
pub fn format_date_time(value: Option<&str>) -> String {
    format_date_time_in(value, &Local)
}

/// Same as [`format_date_time`] with an explicit display time zone
pub fn format_date_time_in<Tz: TimeZone>(value: Option<&str>, tz: &Tz) -> String {
    let value = match value {
        None | Some("") => return labels::NOT_AVAILABLE.to_string(),
        Some(v) => v,
    };

    match parse_timestamp(value, tz) {
        Some(dt) => render(&dt),
        None => labels::INVALID_DATE.to_string(),
    }
}

/// Parse the layouts the API emits
///
/// Values with an offset are converted into `tz`; values without one are
/// taken as wall-clock time in `tz`; bare dates, including `YYYY-MM` and
/// `YYYY`, are UTC midnight.
fn parse_timestamp<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz));
    }

    for layout in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_partial_date(value))?;
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(midnight.with_timezone(tz))
}

/// `YYYY-MM` or `YYYY`, starting on the first day of the period
fn parse_partial_date(value: &str) -> Option<NaiveDate> {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let (year, month) = match value.split_once('-') {
        Some((year, month)) if month.len() == 2 && digits(month) => (year, month.parse().ok()?),
        Some(_) => return None,
        None => (value, 1),
    };
    if year.len() != 4 || !digits(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

fn render<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {} {} г., {:02}:{:02}",
        dt.day(),
        MONTHS_SHORT[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}
