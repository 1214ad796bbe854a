//! Calculation logic for timecard payroll.
//!
//! This module contains hours worked per date, wages per date, wage totals
//! per employee and payroll totals across a roster. The free functions use
//! the default wage rules; [`PayrollCalculator`] applies configured ones.

mod calculator;
mod hours_worked;
mod wages;

pub use calculator::PayrollCalculator;
pub use hours_worked::hours_worked_on_date;
pub use wages::{all_wages_for, calculate_payroll, wage_lines, wages_earned_on_date};
