//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for front-matter timestamps
//! and the `<lastmod>` field of sitemap entries.
//!
//! # Accepted Inputs
//!
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DDTHH:MM:SS` (a space may replace `T`)
//! - optional fractional seconds: `YYYY-MM-DDTHH:MM:SS.sss`
//! - optional zone: `Z`, `+HH:MM`, `-HH:MM` (converted to UTC)
//!
//! A timestamp without a zone is taken as UTC.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15")?;
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45.120+02:00")?;
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T12:30:45Z");
//! ```

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reasons a timestamp string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected YYYY-MM-DD or an RFC 3339 timestamp")]
    Format,
    #[error("{field} is invalid: {value}")]
    OutOfRange { field: &'static str, value: u32 },
    #[error("year {0} is outside 0000-9999 once converted to UTC")]
    YearOutOfRange(i64),
}

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Whether the source carried a time component.
    pub has_time: bool,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            has_time: true,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            has_time: false,
        }
    }

    /// Parse a front-matter timestamp (see module docs for the accepted forms).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(DateError::Format);
        }

        let year = parse_u16(&bytes[0..4]).ok_or(DateError::Format)?;
        let month = parse_u8(&bytes[5..7]).ok_or(DateError::Format)?;
        let day = parse_u8(&bytes[8..10]).ok_or(DateError::Format)?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate()?;
            return Ok(dt);
        }

        // Time part: "THH:MM:SS"
        if bytes.len() < 19 || !matches!(bytes[10], b'T' | b't' | b' ') {
            return Err(DateError::Format);
        }
        if bytes[13] != b':' || bytes[16] != b':' {
            return Err(DateError::Format);
        }
        let hour = parse_u8(&bytes[11..13]).ok_or(DateError::Format)?;
        let minute = parse_u8(&bytes[14..16]).ok_or(DateError::Format)?;
        let second = parse_u8(&bytes[17..19]).ok_or(DateError::Format)?;

        let mut rest = &bytes[19..];

        // Fractional seconds are accepted and dropped.
        if let Some((&b'.', tail)) = rest.split_first() {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return Err(DateError::Format);
            }
            rest = &tail[digits..];
        }

        let offset_minutes = parse_offset(rest)?;

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate()?;

        if offset_minutes == 0 {
            Ok(dt)
        } else {
            dt.shift_minutes(-offset_minutes)
        }
    }

    pub fn validate(&self) -> Result<(), DateError> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            ..
        } = *self;

        if !(1..=12).contains(&month) {
            return Err(DateError::OutOfRange {
                field: "month",
                value: month.into(),
            });
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            return Err(DateError::OutOfRange {
                field: "day",
                value: day.into(),
            });
        }
        if hour > 23 {
            return Err(DateError::OutOfRange {
                field: "hour",
                value: hour.into(),
            });
        }
        if minute > 59 {
            return Err(DateError::OutOfRange {
                field: "minute",
                value: minute.into(),
            });
        }
        if second > 59 {
            return Err(DateError::OutOfRange {
                field: "second",
                value: second.into(),
            });
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Move the instant by `delta` minutes, carrying across day boundaries.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shift_minutes(self, delta: i64) -> Result<Self, DateError> {
        let days = days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        let minutes =
            days * 1440 + i64::from(self.hour) * 60 + i64::from(self.minute) + delta;

        let (days, minute_of_day) = (minutes.div_euclid(1440), minutes.rem_euclid(1440));
        let (year, month, day) = civil_from_days(days);
        if !(0..=9999).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }

        Ok(Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
            hour: (minute_of_day / 60) as u8,
            minute: (minute_of_day % 60) as u8,
            second: self.second,
            has_time: true,
        })
    }

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Format for a W3C datetime field such as sitemap `<lastmod>`.
    ///
    /// Date-only inputs stay date-only.
    pub fn to_w3c(self) -> String {
        if self.has_time {
            self.to_rfc3339()
        } else {
            format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl std::fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_w3c())
    }
}

impl Serialize for DateTimeUtc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_w3c())
    }
}

/// Parse the zone suffix, returning its offset east of UTC in minutes.
fn parse_offset(bytes: &[u8]) -> Result<i64, DateError> {
    match bytes {
        [] | [b'Z' | b'z'] => Ok(0),
        [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
            let hours = parse_u8(&[*h1, *h2]).ok_or(DateError::Format)?;
            let minutes = parse_u8(&[*m1, *m2]).ok_or(DateError::Format)?;
            if hours > 23 || minutes > 59 {
                return Err(DateError::Format);
            }
            let total = i64::from(hours) * 60 + i64::from(minutes);
            Ok(if *sign == b'-' { -total } else { total })
        }
        _ => Err(DateError::Format),
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
