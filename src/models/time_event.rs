//! Time event model and clock stamp parsing.
//!
//! A clock stamp is the text value `"<date> <hour>"` handed to the event
//! logging operations. The hour token is a packed `HHMM` integer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PayrollError, PayrollResult};

/// Which clock action an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Clocking in.
    TimeIn,
    /// Clocking out.
    TimeOut,
}

/// A single clock action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvent {
    /// The kind of event.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// The date key, e.g. "2014-05-13". Not validated.
    pub date: String,
    /// The packed `HHMM` hour, e.g. 900 for "0900".
    pub hour: i64,
}

/// A parsed `"<date> <hour>"` value.
///
/// # Examples
///
/// ```
/// use timecard_payroll::models::ClockStamp;
///
/// let stamp = ClockStamp::parse("2014-05-13 0900").unwrap();
/// assert_eq!(stamp.date, "2014-05-13");
/// assert_eq!(stamp.hour, 900);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockStamp {
    /// The date token.
    pub date: String,
    /// The decoded hour token.
    pub hour: i64,
}

impl ClockStamp {
    /// Parses a clock stamp from text.
    ///
    /// The value is split on single spaces: the first token is the date and
    /// the second the hour. Extra tokens are ignored. The hour is read as the
    /// leading integer of its token, so `"17xx"` decodes to 17.
    pub fn parse(text: &str) -> PayrollResult<Self> {
        let mut tokens = text.split(' ');
        let date = tokens.next().unwrap_or_default();
        let hour_token = tokens.next().ok_or_else(|| {
            PayrollError::invalid_date_time(format!("Missing hour in '{}'", text))
        })?;
        let hour = parse_leading_int(hour_token).ok_or_else(|| {
            PayrollError::invalid_date_time(format!(
                "Hour '{}' in '{}' is not a number",
                hour_token, text
            ))
        })?;

        Ok(ClockStamp {
            date: date.to_string(),
            hour,
        })
    }

    pub(crate) fn into_event(self, event_type: EventType) -> TimeEvent {
        TimeEvent {
            event_type,
            date: self.date,
            hour: self.hour,
        }
    }
}

/// Reads the leading base-10 integer of `token`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit is found or the value does
/// not fit in an `i64`.
fn parse_leading_int(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl TryFrom<&str> for ClockStamp {
    type Error = PayrollError;

    fn try_from(text: &str) -> PayrollResult<Self> {
        ClockStamp::parse(text)
    }
}

impl TryFrom<&String> for ClockStamp {
    type Error = PayrollError;

    fn try_from(text: &String) -> PayrollResult<Self> {
        ClockStamp::parse(text)
    }
}

impl TryFrom<String> for ClockStamp {
    type Error = PayrollError;

    fn try_from(text: String) -> PayrollResult<Self> {
        ClockStamp::parse(&text)
    }
}

impl TryFrom<&Value> for ClockStamp {
    type Error = PayrollError;

    fn try_from(value: &Value) -> PayrollResult<Self> {
        match value {
            Value::String(text) => ClockStamp::parse(text),
            other => Err(PayrollError::invalid_date_time(format!(
                "Expected a string, got {}",
                json_kind(other)
            ))),
        }
    }
}

impl TryFrom<Value> for ClockStamp {
    type Error = PayrollError;

    fn try_from(value: Value) -> PayrollResult<Self> {
        ClockStamp::try_from(&value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expect_invalid_argument(result: PayrollResult<ClockStamp>) -> String {
        match result {
            Err(PayrollError::InvalidArgument { message, .. }) => message,
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_keeps_leading_zero_digits_as_decimal() {
        let stamp = ClockStamp::parse("2014-05-13 0900").unwrap();
        assert_eq!(stamp.date, "2014-05-13");
        assert_eq!(stamp.hour, 900);
    }

    #[test]
    fn test_parse_short_hour_token() {
        let stamp = ClockStamp::parse("2014-05-13 7").unwrap();
        assert_eq!(stamp.hour, 7);
    }

    #[test]
    fn test_parse_tolerates_trailing_characters() {
        let stamp = ClockStamp::parse("2014-05-13 17xx").unwrap();
        assert_eq!(stamp.hour, 17);
    }

    #[test]
    fn test_parse_ignores_extra_tokens() {
        let stamp = ClockStamp::parse("2014-05-13 1700 late").unwrap();
        assert_eq!(stamp.hour, 1700);
    }

    #[test]
    fn test_parse_accepts_signed_hour() {
        assert_eq!(ClockStamp::parse("2014-05-13 -30").unwrap().hour, -30);
        assert_eq!(ClockStamp::parse("2014-05-13 +30").unwrap().hour, 30);
    }

    #[test]
    fn test_parse_missing_hour_is_invalid() {
        let message = expect_invalid_argument(ClockStamp::parse("2014-05-13"));
        assert!(message.contains("Missing hour"));
    }

    #[test]
    fn test_parse_double_space_leaves_empty_hour() {
        let message = expect_invalid_argument(ClockStamp::parse("2014-05-13  0900"));
        assert!(message.contains("not a number"));
    }

    #[test]
    fn test_parse_non_numeric_hour_is_invalid() {
        expect_invalid_argument(ClockStamp::parse("2014-05-13 noon"));
        expect_invalid_argument(ClockStamp::parse("2014-05-13 -"));
    }

    #[test]
    fn test_parse_overflowing_hour_is_invalid() {
        expect_invalid_argument(ClockStamp::parse("2014-05-13 99999999999999999999"));
    }

    #[test]
    fn test_json_string_value_parses() {
        let stamp = ClockStamp::try_from(&json!("2014-05-13 1700")).unwrap();
        assert_eq!(stamp.hour, 1700);
    }

    #[test]
    fn test_json_non_string_value_is_rejected() {
        let message = expect_invalid_argument(ClockStamp::try_from(json!(201405131700_i64)));
        assert_eq!(message, "Expected a string, got number");

        let message = expect_invalid_argument(ClockStamp::try_from(&json!(null)));
        assert_eq!(message, "Expected a string, got null");
    }

    #[test]
    fn test_event_type_serializes_as_type_field() {
        let event = ClockStamp::parse("2014-05-13 0900")
            .unwrap()
            .into_event(EventType::TimeIn);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({ "type": "TimeIn", "date": "2014-05-13", "hour": 900 })
        );
    }
}
