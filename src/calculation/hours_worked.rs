//! Hours worked calculation.
//!
//! Hours are derived from the first time-in and first time-out logged for a
//! date. The packed `HHMM` difference is divided by the hour scale, so
//! 1700 - 0900 = 800 becomes 8 hours with the default scale of 100.

use rust_decimal::Decimal;
use tracing::{trace, warn};

use crate::config::WageRules;
use crate::models::{EmployeeRecord, TimeEvent};

/// Returns the first event in append order whose date equals `date`.
fn first_on_date<'a>(events: &'a [TimeEvent], date: &str) -> Option<&'a TimeEvent> {
    events.iter().find(|event| event.date == date)
}

pub(crate) fn hours_with_rules(record: &EmployeeRecord, date: &str, rules: &WageRules) -> Decimal {
    let (Some(time_in), Some(time_out)) = (
        first_on_date(&record.time_in_events, date),
        first_on_date(&record.time_out_events, date),
    ) else {
        trace!(first_name = %record.first_name, date, "No matching clock pair for date");
        return Decimal::ZERO;
    };

    let difference = Decimal::from(time_out.hour) - Decimal::from(time_in.hour);
    if difference < Decimal::ZERO {
        warn!(
            first_name = %record.first_name,
            date,
            time_in = time_in.hour,
            time_out = time_out.hour,
            "Time-out precedes time-in; hours will be negative"
        );
    }

    difference.checked_div(rules.hour_scale).unwrap_or_else(|| {
        warn!(
            first_name = %record.first_name,
            date,
            hour_scale = %rules.hour_scale,
            "Hour scale cannot divide the clock difference; counting zero hours"
        );
        Decimal::ZERO
    })
}

/// Calculates the hours an employee worked on a date.
///
/// Uses the first time-in and the first time-out logged for `date`, by
/// append order rather than by hour value. Returns zero when either is
/// missing. A time-out earlier than its time-in yields negative hours.
///
/// # Examples
///
/// ```
/// use timecard_payroll::{create_employee_record, create_time_in_event, create_time_out_event, hours_worked_on_date};
/// use rust_decimal::Decimal;
///
/// let mut record = create_employee_record(("Ben", "Bray", "Manager", Decimal::from(12)));
/// create_time_in_event(&mut record, "2014-05-13 0900")?;
/// create_time_out_event(&mut record, "2014-05-13 1700")?;
///
/// assert_eq!(hours_worked_on_date(&record, "2014-05-13"), Decimal::from(8));
/// assert_eq!(hours_worked_on_date(&record, "2014-05-14"), Decimal::ZERO);
/// # Ok::<(), timecard_payroll::PayrollError>(())
/// ```
pub fn hours_worked_on_date(record: &EmployeeRecord, date: &str) -> Decimal {
    hours_with_rules(record, date, &WageRules::default())
}
