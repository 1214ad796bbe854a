//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `payroll.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifying information about a payroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PayrollMetadata {
    /// A human-readable name for this configuration.
    pub name: String,
    /// The currency wages are paid in (e.g., "USD").
    pub currency: String,
}

impl Default for PayrollMetadata {
    fn default() -> Self {
        Self {
            name: "Standard timecard payroll".to_string(),
            currency: "USD".to_string(),
        }
    }
}

/// Arithmetic rules applied when turning clock events into wages.
///
/// The defaults divide the packed `HHMM` difference by 100 and apply no
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WageRules {
    /// Divisor applied to the difference between packed hours.
    #[serde(default = "default_hour_scale")]
    pub hour_scale: Decimal,
    /// Decimal places each per-date wage is rounded to, if any.
    #[serde(default)]
    pub wage_decimal_places: Option<u32>,
}

fn default_hour_scale() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Default for WageRules {
    fn default() -> Self {
        Self {
            hour_scale: default_hour_scale(),
            wage_decimal_places: None,
        }
    }
}

/// The complete payroll configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PayrollConfig {
    /// Configuration metadata.
    #[serde(default)]
    pub payroll: PayrollMetadata,
    /// Wage arithmetic rules.
    #[serde(default)]
    pub wage_rules: WageRules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_use_hundredths() {
        let rules = WageRules::default();
        assert_eq!(rules.hour_scale, Decimal::from(100));
        assert_eq!(rules.wage_decimal_places, None);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: PayrollConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PayrollConfig::default());
    }

    #[test]
    fn test_partial_wage_rules_fill_defaults() {
        let config: PayrollConfig = serde_yaml::from_str("wage_rules:\n  wage_decimal_places: 2\n").unwrap();
        assert_eq!(config.wage_rules.hour_scale, Decimal::from(100));
        assert_eq!(config.wage_rules.wage_decimal_places, Some(2));
        assert_eq!(config.payroll.currency, "USD");
    }
}
