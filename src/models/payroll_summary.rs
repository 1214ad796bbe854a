//! Wage breakdown models.
//!
//! This module contains the [`WageLine`] and [`PayrollSummary`] types that
//! expose how a wage total was built up from individual time-in events.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wages attributed to one time-in event.
///
/// An employee with two time-ins on the same date gets two lines for that
/// date, each carrying the full day's wages.
///
/// # Example
///
/// ```
/// use timecard_payroll::models::WageLine;
/// use rust_decimal::Decimal;
///
/// let line = WageLine {
///     date: "2014-05-13".to_string(),
///     hours: Decimal::from(8),
///     rate: Decimal::from(12),
///     amount: Decimal::from(96),
/// };
/// assert_eq!(line.hours * line.rate, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageLine {
    /// The date of the time-in event.
    pub date: String,
    /// Hours worked on that date.
    pub hours: Decimal,
    /// The employee's pay per hour.
    pub rate: Decimal,
    /// Wages earned on that date.
    pub amount: Decimal,
}

/// Wage lines and total for a single employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWages {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// One line per time-in event, in append order.
    pub lines: Vec<WageLine>,
    /// Sum of line amounts.
    pub total: Decimal,
}

/// Payroll breakdown across a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The currency the amounts are expressed in.
    pub currency: String,
    /// Per-employee breakdowns in roster order.
    pub employees: Vec<EmployeeWages>,
    /// Sum of all employee totals.
    pub total: Decimal,
}

impl PayrollSummary {
    /// Returns the number of wage lines across all employees.
    pub fn line_count(&self) -> usize {
        self.employees.iter().map(|e| e.lines.len()).sum()
    }
}
