//! RFC 1123 timestamps for the `Date` header.
//!
//! The signature covers the exact bytes of the `Date` header, so the weekday
//! and month names must always be the English abbreviations. The names come
//! from the constant tables below and the calendar fields are read
//! numerically; no locale-aware formatting is involved anywhere.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Abbreviated weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Abbreviated month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// English abbreviated weekday of `dt`.
///
/// # Examples
///
/// ```
/// use integrations_ses_mailer::signing::weekday_abbreviation;
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(1970, 11, 5, 0, 0, 0).unwrap();
/// assert_eq!(weekday_abbreviation(&dt), "Thu");
/// ```
pub fn weekday_abbreviation(dt: &DateTime<Utc>) -> &'static str {
    WEEKDAY_NAMES[dt.weekday().num_days_from_monday() as usize]
}

/// English abbreviated month of `dt`.
pub fn month_abbreviation(dt: &DateTime<Utc>) -> &'static str {
    MONTH_NAMES[dt.month0() as usize]
}

/// Format a timestamp as an RFC 1123 GMT date.
///
/// Returns the date in `Www, DD Mmm YYYY HH:MM:SS GMT` format.
///
/// # Examples
///
/// ```
/// use integrations_ses_mailer::signing::format_http_date;
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(1970, 11, 5, 0, 0, 0).unwrap();
/// assert_eq!(format_http_date(&dt), "Thu, 05 Nov 1970 00:00:00 GMT");
/// ```
pub fn format_http_date(dt: &DateTime<Utc>) -> String {
    format!(
        "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
        weekday_abbreviation(dt),
        dt.day(),
        month_abbreviation(dt),
        dt.year(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    )
}
