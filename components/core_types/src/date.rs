//! Date object payload
//!
//! A date is a time value in milliseconds since the Unix epoch. NaN marks an
//! invalid date; an invalid date is still a date object.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// JavaScript Date object representation
#[derive(Debug, Clone, PartialEq)]
pub struct DateObject {
    /// Milliseconds since January 1, 1970 00:00:00 UTC, NaN when invalid
    time_value: f64,
}

impl DateObject {
    /// Create a Date with the current time
    pub fn now() -> Self {
        DateObject {
            time_value: Utc::now().timestamp_millis() as f64,
        }
    }

    /// Create a Date from milliseconds since epoch
    pub fn from_millis(ms: f64) -> Self {
        let time_value = if ms.is_finite() { ms.trunc() } else { f64::NAN };
        DateObject { time_value }
    }

    /// Parse a date string the way `new Date(string)` does.
    ///
    /// Unparseable input gives an invalid date rather than an error.
    pub fn parse(s: &str) -> Self {
        Self::from_millis(Self::parse_time_value(s.trim()).unwrap_or(f64::NAN))
    }

    fn parse_time_value(s: &str) -> Option<f64> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.timestamp_millis() as f64);
        }
        // Date-only ISO forms are UTC
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let dt = date.and_hms_opt(0, 0, 0)?;
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Some(dt.and_utc().timestamp_millis() as f64);
            }
        }
        NaiveDate::parse_from_str(s, "%m/%d/%Y")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().timestamp_millis() as f64)
    }

    /// Internal time value
    pub fn time_value(&self) -> f64 {
        self.time_value
    }

    /// Whether the time value is a real instant
    pub fn is_valid(&self) -> bool {
        !self.time_value.is_nan()
    }

    /// `toISOString()`, or None for an invalid date
    pub fn to_iso_string(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(self.time_value as i64)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
