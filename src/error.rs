//! Error types for the employer cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, the rate-table loader and the input boundary
//! can report.

use thiserror::Error;

/// The main error type for the employer cost engine.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use employer_cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/table.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/table.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The rate table parsed but is inconsistent (missing default band,
    /// inverted band bounds, negative rates).
    #[error("Invalid rate table: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// Economic activity code was not found in the activity catalog.
    #[error("Economic activity not found: {code}")]
    ActivityNotFound {
        /// The activity code that was not found.
        code: String,
    },

    /// An employee input field is outside its domain.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The engine refused the input before computing anything.
    ///
    /// Raised for an unknown contribution group when the rate table's
    /// unknown-group policy is `reject`.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of the rejected input.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
