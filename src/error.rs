//! Error types for timecard payroll.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only event logging and configuration loading can fail; every payroll
//! computation degrades to a numeric result instead.

use thiserror::Error;

/// The main error type for timecard payroll.
///
/// # Example
///
/// ```
/// use timecard_payroll::error::PayrollError;
///
/// let error = PayrollError::InvalidArgument {
///     argument: "date_time".to_string(),
///     message: "Expected a string, got number".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid argument 'date_time': Expected a string, got number"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An argument passed to an event logging operation was unusable.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// The name of the rejected argument.
        argument: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the calculator cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl PayrollError {
    pub(crate) fn invalid_date_time(message: impl Into<String>) -> Self {
        PayrollError::InvalidArgument {
            argument: "date_time".to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
