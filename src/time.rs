use crate::error::{MailgunError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Number, Value};
use std::ops::Deref;

/// Point in time accepted by the API's date-valued query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(pub DateTime<Utc>);

impl Time {
    /// Create a new Time from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }

    /// Parse a calendar date or date/time.
    ///
    /// Accepts RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`.
    /// Values without an offset are taken as UTC.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Time(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
            return Ok(Time(dt.with_timezone(&Utc)));
        }
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Time(Utc.from_utc_datetime(&naive)));
            }
        }
        if let Some(naive) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(Time(Utc.from_utc_datetime(&naive)));
        }

        Err(MailgunError::argument(format!("unrecognized date: {}", input)))
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// Get the timestamp in milliseconds
    pub fn unix_milli(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Epoch seconds, fractional when the time has a millisecond part
    pub fn epoch_seconds(&self) -> Value {
        let millis = self.unix_milli();
        if millis % 1000 == 0 {
            Value::from(millis / 1000)
        } else {
            number_value(millis as f64 / 1000.0)
        }
    }
}

impl Deref for Time {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }
}

/// Convert an event-search `begin` value.
///
/// Numbers are multiplied by 1000; anything else is parsed as a date and sent
/// as epoch seconds. The two branches disagree on units and the API relies on
/// callers knowing that, so neither is adjusted here.
pub fn convert_begin(value: &Value) -> Result<Value> {
    match value {
        Value::Number(n) => match n.as_i64().and_then(|i| i.checked_mul(1000)) {
            Some(scaled) => Ok(Value::from(scaled)),
            None => {
                let f = n
                    .as_f64()
                    .ok_or_else(|| MailgunError::argument("`begin` is out of range"))?;
                Ok(number_value(f * 1000.0))
            }
        },
        Value::String(s) => Ok(Time::parse(s)?.epoch_seconds()),
        other => Err(MailgunError::argument(format!(
            "`begin` must be a number or a date string, got {}",
            other
        ))),
    }
}

/// Whole floats become integers so they print without a trailing `.0`
fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}
