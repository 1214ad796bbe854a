//! Wage and payroll totals.
//!
//! This module turns hours into wages for a single date, a single employee
//! and a whole roster, using the default [`WageRules`].

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use super::hours_worked::hours_with_rules;
use crate::config::WageRules;
use crate::models::{EmployeeRecord, WageLine};

pub(crate) fn wage_line_with_rules(record: &EmployeeRecord, date: &str, rules: &WageRules) -> WageLine {
    let hours = hours_with_rules(record, date, rules);
    let mut amount = hours.checked_mul(record.pay_per_hour).unwrap_or_else(|| {
        warn!(
            first_name = %record.first_name,
            date,
            hours = %hours,
            pay_per_hour = %record.pay_per_hour,
            "Wages exceed the decimal range; counting zero wages"
        );
        Decimal::ZERO
    });
    if let Some(places) = rules.wage_decimal_places {
        amount = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    }

    WageLine {
        date: date.to_string(),
        hours,
        rate: record.pay_per_hour,
        amount,
    }
}

/// Adds wage amounts, saturating at the decimal range instead of panicking.
pub(crate) fn total_wages<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

pub(crate) fn wage_lines_with_rules(record: &EmployeeRecord, rules: &WageRules) -> Vec<WageLine> {
    record
        .time_in_events
        .iter()
        .map(|event| wage_line_with_rules(record, &event.date, rules))
        .collect()
}

pub(crate) fn all_wages_with_rules(record: &EmployeeRecord, rules: &WageRules) -> Decimal {
    total_wages(wage_lines_with_rules(record, rules).iter().map(|line| line.amount))
}

/// Calculates the wages earned on a date: hours worked times pay per hour.
///
/// # Examples
///
/// ```
/// use timecard_payroll::{create_employee_record, create_time_in_event, create_time_out_event, wages_earned_on_date};
/// use rust_decimal::Decimal;
///
/// let mut record = create_employee_record(("Ben", "Bray", "Manager", Decimal::from(12)));
/// create_time_in_event(&mut record, "2014-05-13 0900")?;
/// create_time_out_event(&mut record, "2014-05-13 1700")?;
///
/// assert_eq!(wages_earned_on_date(&record, "2014-05-13"), Decimal::from(96));
/// # Ok::<(), timecard_payroll::PayrollError>(())
/// ```
pub fn wages_earned_on_date(record: &EmployeeRecord, date: &str) -> Decimal {
    wage_line_with_rules(record, date, &WageRules::default()).amount
}

/// Returns one wage line per time-in event, in append order.
///
/// The line amounts sum to [`all_wages_for`].
pub fn wage_lines(record: &EmployeeRecord) -> Vec<WageLine> {
    wage_lines_with_rules(record, &WageRules::default())
}

/// Sums the wages for every date in the record's time-in events.
///
/// A date that appears in several time-in events is counted once per
/// occurrence.
pub fn all_wages_for(record: &EmployeeRecord) -> Decimal {
    all_wages_with_rules(record, &WageRules::default())
}

/// Sums [`all_wages_for`] over a roster.
pub fn calculate_payroll(records: &[EmployeeRecord]) -> Decimal {
    let rules = WageRules::default();
    total_wages(
        records
            .iter()
            .map(|record| all_wages_with_rules(record, &rules)),
    )
}
