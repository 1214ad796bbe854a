//! Configuration loading for timecard payroll.
//!
//! This module loads payroll settings from a `payroll.yaml` file: the
//! configuration name, the payout currency, and the wage arithmetic rules.
//!
//! # Example
//!
//! ```no_run
//! use timecard_payroll::config::ConfigLoader;
//! use timecard_payroll::PayrollCalculator;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! let calculator = PayrollCalculator::from_config(&loader);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{PayrollConfig, PayrollMetadata, WageRules};
