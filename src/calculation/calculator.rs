//! Configured payroll calculator.
//!
//! [`PayrollCalculator`] runs the same computations as the free functions
//! but with wage rules and currency taken from a loaded configuration.

use rust_decimal::Decimal;
use tracing::debug;

use super::hours_worked::hours_with_rules;
use super::wages::{all_wages_with_rules, total_wages, wage_line_with_rules, wage_lines_with_rules};
use crate::config::{ConfigLoader, WageRules};
use crate::models::{EmployeeRecord, EmployeeWages, PayrollSummary, WageLine};

/// Computes hours, wages and payroll totals under configured rules.
///
/// # Example
///
/// ```
/// use timecard_payroll::config::ConfigLoader;
/// use timecard_payroll::{PayrollCalculator, create_employee_record, create_time_in_event, create_time_out_event};
/// use rust_decimal::Decimal;
///
/// let yaml = "wage_rules:\n  wage_decimal_places: 2\n";
/// let loader = ConfigLoader::from_yaml_str(yaml, "inline.yaml")?;
/// let calculator = PayrollCalculator::from_config(&loader);
///
/// let mut record = create_employee_record(("Ben", "Bray", "Manager", Decimal::new(1001, 2)));
/// create_time_in_event(&mut record, "2014-05-13 0900")?;
/// create_time_out_event(&mut record, "2014-05-13 0950")?;
///
/// // 0.5 hours at 10.01
/// assert_eq!(calculator.wages_earned_on_date(&record, "2014-05-13"), Decimal::new(501, 2));
/// # Ok::<(), timecard_payroll::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    rules: WageRules,
    currency: String,
}

impl Default for PayrollCalculator {
    fn default() -> Self {
        Self::from_config(&ConfigLoader::default())
    }
}

impl PayrollCalculator {
    /// Creates a calculator with explicit rules and currency.
    pub fn new(rules: WageRules, currency: impl Into<String>) -> Self {
        Self {
            rules,
            currency: currency.into(),
        }
    }

    /// Creates a calculator from loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.wage_rules(), config.metadata().currency.clone())
    }

    /// Returns the rules this calculator applies.
    pub fn rules(&self) -> &WageRules {
        &self.rules
    }

    /// Returns the currency used in summaries.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// See [`crate::hours_worked_on_date`].
    pub fn hours_worked_on_date(&self, record: &EmployeeRecord, date: &str) -> Decimal {
        hours_with_rules(record, date, &self.rules)
    }

    /// See [`crate::wages_earned_on_date`].
    pub fn wages_earned_on_date(&self, record: &EmployeeRecord, date: &str) -> Decimal {
        wage_line_with_rules(record, date, &self.rules).amount
    }

    /// See [`crate::wage_lines`].
    pub fn wage_lines(&self, record: &EmployeeRecord) -> Vec<WageLine> {
        wage_lines_with_rules(record, &self.rules)
    }

    /// See [`crate::all_wages_for`].
    pub fn all_wages_for(&self, record: &EmployeeRecord) -> Decimal {
        all_wages_with_rules(record, &self.rules)
    }

    /// See [`crate::calculate_payroll`].
    pub fn calculate_payroll(&self, records: &[EmployeeRecord]) -> Decimal {
        total_wages(records.iter().map(|record| self.all_wages_for(record)))
    }

    /// Breaks a roster's payroll down by employee and time-in event.
    ///
    /// The summary total equals [`PayrollCalculator::calculate_payroll`].
    pub fn summarize(&self, records: &[EmployeeRecord]) -> PayrollSummary {
        let employees: Vec<EmployeeWages> = records
            .iter()
            .map(|record| {
                let lines = self.wage_lines(record);
                let total = total_wages(lines.iter().map(|line| line.amount));
                EmployeeWages {
                    first_name: record.first_name.clone(),
                    family_name: record.family_name.clone(),
                    lines,
                    total,
                }
            })
            .collect();

        let total = total_wages(employees.iter().map(|e| e.total));

        debug!(
            employees = employees.len(),
            total = %total,
            currency = self.currency(),
            "Summarized payroll"
        );

        PayrollSummary {
            currency: self.currency().to_string(),
            employees,
            total,
        }
    }
}
