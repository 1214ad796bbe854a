//! Configuration loader for payroll settings.
//!
//! This module provides the [`ConfigLoader`] struct which reads
//! `payroll.yaml` from a configuration directory.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{PayrollConfig, PayrollMetadata, WageRules};
use crate::error::{PayrollError, PayrollResult};

/// The file name looked up inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and validates payroll configuration.
///
/// # Example
///
/// ```no_run
/// use timecard_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Paying in {}", loader.metadata().currency);
/// # Ok::<(), timecard_payroll::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads `payroll.yaml` from the given directory.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::ConfigNotFound`] if the file does not exist
    /// - [`PayrollError::ConfigParseError`] if the file is not valid YAML
    ///   for [`PayrollConfig`]
    /// - [`PayrollError::InvalidConfig`] if a value is unusable
    pub fn load<P: AsRef<Path>>(config_dir: P) -> PayrollResult<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILE_NAME);
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(PayrollError::ConfigNotFound { path: path_str });
        }

        let contents = fs::read_to_string(&path).map_err(|e| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        Self::from_yaml_str(&contents, &path_str)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// `path` is only used to label errors.
    pub fn from_yaml_str(contents: &str, path: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(contents).map_err(|e| PayrollError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        validate(&config)?;

        debug!(
            name = %config.payroll.name,
            currency = %config.payroll.currency,
            hour_scale = %config.wage_rules.hour_scale,
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.config.payroll
    }

    /// Returns the wage arithmetic rules.
    pub fn wage_rules(&self) -> WageRules {
        self.config.wage_rules
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}

fn validate(config: &PayrollConfig) -> PayrollResult<()> {
    if config.wage_rules.hour_scale <= Decimal::ZERO {
        return Err(PayrollError::InvalidConfig {
            field: "wage_rules.hour_scale".to_string(),
            message: format!(
                "must be greater than zero, got {}",
                config.wage_rules.hour_scale
            ),
        });
    }

    if config.payroll.currency.trim().is_empty() {
        return Err(PayrollError::InvalidConfig {
            field: "payroll.currency".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    Ok(())
}
