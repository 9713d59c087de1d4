//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Calculations only ever fail with [`EngineError::InvalidInput`]; the
//! remaining variants belong to rate configuration loading.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use jamaica_payroll::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "gross_pay".to_string(),
///     message: "must be non-negative, got -1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'gross_pay': must be non-negative, got -1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A numeric argument was negative or non-finite, or a pay period
    /// identifier was not recognized.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The argument that was rejected.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// Rate configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate configuration parsed but broke one of its invariants.
    #[error("Invalid rate configuration: {message}")]
    InvalidConfig {
        /// The invariant that was violated.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
