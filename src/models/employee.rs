//! Employee record model and record construction.
//!
//! This module defines the [`EmployeeRecord`] struct, the [`EmployeeFields`]
//! construction tuple, and the functions that build records from tuples.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeEvent;

/// The fixed construction tuple `[first_name, family_name, title, pay_per_hour]`.
///
/// Deserializes from a four-element array, so `["Ben", "Bray", "Manager", 12]`
/// in JSON or YAML becomes an `EmployeeFields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields(
    /// First name.
    pub String,
    /// Family name.
    pub String,
    /// Job title.
    pub String,
    /// Pay per hour in currency units.
    pub Decimal,
);

impl<'a> From<(&'a str, &'a str, &'a str, Decimal)> for EmployeeFields {
    fn from((first_name, family_name, title, pay_per_hour): (&'a str, &'a str, &'a str, Decimal)) -> Self {
        EmployeeFields(
            first_name.to_string(),
            family_name.to_string(),
            title.to_string(),
            pay_per_hour,
        )
    }
}

impl From<(String, String, String, Decimal)> for EmployeeFields {
    fn from((first_name, family_name, title, pay_per_hour): (String, String, String, Decimal)) -> Self {
        EmployeeFields(first_name, family_name, title, pay_per_hour)
    }
}

/// One worker and their attendance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The employee's job title.
    pub title: String,
    /// Pay per hour in currency units.
    pub pay_per_hour: Decimal,
    /// Time-in events in append order.
    #[serde(default)]
    pub time_in_events: Vec<TimeEvent>,
    /// Time-out events in append order.
    #[serde(default)]
    pub time_out_events: Vec<TimeEvent>,
}

impl From<EmployeeFields> for EmployeeRecord {
    fn from(fields: EmployeeFields) -> Self {
        let EmployeeFields(first_name, family_name, title, pay_per_hour) = fields;
        EmployeeRecord {
            first_name,
            family_name,
            title,
            pay_per_hour,
            time_in_events: Vec::new(),
            time_out_events: Vec::new(),
        }
    }
}

/// Creates an employee record with empty event lists.
///
/// # Examples
///
/// ```
/// use timecard_payroll::create_employee_record;
/// use rust_decimal::Decimal;
///
/// let record = create_employee_record(("Ben", "Bray", "Manager", Decimal::from(12)));
/// assert_eq!(record.first_name, "Ben");
/// assert!(record.time_in_events.is_empty());
/// assert!(record.time_out_events.is_empty());
/// ```
pub fn create_employee_record(fields: impl Into<EmployeeFields>) -> EmployeeRecord {
    EmployeeRecord::from(fields.into())
}

/// Creates one record per row, preserving order.
pub fn create_employee_records<I>(rows: I) -> Vec<EmployeeRecord>
where
    I: IntoIterator,
    I::Item: Into<EmployeeFields>,
{
    rows.into_iter().map(create_employee_record).collect()
}
