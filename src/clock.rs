//! Event logging for employee records.
//!
//! Both operations append to the record in place and hand the same record
//! back so calls can be chained.

use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{ClockStamp, EmployeeRecord, EventType};

/// Appends a time-in event parsed from `date_time` to the record.
///
/// `date_time` is a `"<date> <hour>"` value such as `"2014-05-13 0900"`,
/// given as text or as a `serde_json::Value`. A value that is not text, or
/// whose hour token holds no number, fails with
/// [`PayrollError::InvalidArgument`] and leaves the record unchanged.
///
/// # Examples
///
/// ```
/// use timecard_payroll::{create_employee_record, create_time_in_event, create_time_out_event};
/// use rust_decimal::Decimal;
///
/// let mut record = create_employee_record(("Ben", "Bray", "Manager", Decimal::from(12)));
/// let record = create_time_in_event(&mut record, "2014-05-13 0900")?;
/// let record = create_time_out_event(record, "2014-05-13 1700")?;
/// assert_eq!(record.time_in_events[0].hour, 900);
/// assert_eq!(record.time_out_events[0].hour, 1700);
/// # Ok::<(), timecard_payroll::PayrollError>(())
/// ```
pub fn create_time_in_event<T>(
    record: &mut EmployeeRecord,
    date_time: T,
) -> PayrollResult<&mut EmployeeRecord>
where
    T: TryInto<ClockStamp, Error = PayrollError>,
{
    log_event(record, date_time, EventType::TimeIn)
}

/// Appends a time-out event parsed from `date_time` to the record.
///
/// Accepts the same inputs and fails the same way as [`create_time_in_event`].
pub fn create_time_out_event<T>(
    record: &mut EmployeeRecord,
    date_time: T,
) -> PayrollResult<&mut EmployeeRecord>
where
    T: TryInto<ClockStamp, Error = PayrollError>,
{
    log_event(record, date_time, EventType::TimeOut)
}

fn log_event<T>(
    record: &mut EmployeeRecord,
    date_time: T,
    event_type: EventType,
) -> PayrollResult<&mut EmployeeRecord>
where
    T: TryInto<ClockStamp, Error = PayrollError>,
{
    let stamp = date_time.try_into().inspect_err(|err| {
        warn!(
            first_name = %record.first_name,
            event_type = ?event_type,
            error = %err,
            "Rejected clock event"
        );
    })?;

    debug!(
        first_name = %record.first_name,
        event_type = ?event_type,
        date = %stamp.date,
        hour = stamp.hour,
        "Logged clock event"
    );

    let event = stamp.into_event(event_type);
    match event_type {
        EventType::TimeIn => record.time_in_events.push(event),
        EventType::TimeOut => record.time_out_events.push(event),
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::create_employee_record;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn ben() -> EmployeeRecord {
        create_employee_record(("Ben", "Bray", "Manager", Decimal::from(12)))
    }

    #[test]
    fn test_time_in_event_is_appended() {
        let mut record = ben();
        create_time_in_event(&mut record, "2014-02-28 1400").unwrap();

        assert_eq!(record.time_in_events.len(), 1);
        let event = &record.time_in_events[0];
        assert_eq!(event.event_type, EventType::TimeIn);
        assert_eq!(event.date, "2014-02-28");
        assert_eq!(event.hour, 1400);
        assert!(record.time_out_events.is_empty());
    }

    #[test]
    fn test_time_out_event_is_appended() {
        let mut record = ben();
        create_time_out_event(&mut record, "2015-02-28 1700").unwrap();

        assert_eq!(record.time_out_events.len(), 1);
        let event = &record.time_out_events[0];
        assert_eq!(event.event_type, EventType::TimeOut);
        assert_eq!(event.date, "2015-02-28");
        assert_eq!(event.hour, 1700);
        assert!(record.time_in_events.is_empty());
    }

    #[test]
    fn test_events_keep_append_order() {
        let mut record = ben();
        create_time_in_event(&mut record, "2014-05-14 0800").unwrap();
        create_time_in_event(&mut record, "2014-05-13 0900").unwrap();

        let dates: Vec<&str> = record.time_in_events.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2014-05-14", "2014-05-13"]);
    }

    #[test]
    fn test_returns_same_record_for_chaining() {
        let mut record = ben();
        let chained = create_time_in_event(&mut record, "2014-05-13 0900")
            .and_then(|r| create_time_out_event(r, "2014-05-13 1700"))
            .unwrap();

        assert_eq!(chained.first_name, "Ben");
        assert_eq!(chained.time_in_events.len(), 1);
        assert_eq!(chained.time_out_events.len(), 1);
    }

    #[test]
    fn test_accepts_owned_string_and_json_string() {
        let mut record = ben();
        create_time_in_event(&mut record, String::from("2014-05-13 0900")).unwrap();
        create_time_out_event(&mut record, json!("2014-05-13 1700")).unwrap();

        assert_eq!(record.time_in_events[0].hour, 900);
        assert_eq!(record.time_out_events[0].hour, 1700);
    }

    #[test]
    fn test_non_text_argument_is_invalid() {
        let mut record = ben();
        let result = create_time_in_event(&mut record, json!(201405130900_i64));

        assert!(matches!(result, Err(PayrollError::InvalidArgument { .. })));
    }

    #[test]
    fn test_rejected_event_leaves_record_unchanged() {
        let mut record = ben();
        let before = record.clone();

        assert!(create_time_out_event(&mut record, json!(["2014-05-13", 1700])).is_err());
        assert!(create_time_in_event(&mut record, "2014-05-13").is_err());
        assert_eq!(record, before);
    }
}
