//! Error types for the wage/CPI comparison engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data or
//! computing comparison series and salary projections.
//!
//! Empty results (a window with no matching years, a non-positive starting
//! salary) are not errors; they are returned as empty sequences.

use thiserror::Error;

/// The main error type for the wage/CPI comparison engine.
///
/// # Example
///
/// ```
/// use wage_cpi_engine::error::EngineError;
///
/// let error = EngineError::UnknownAgency {
///     code: "NOPE".to_string(),
/// };
/// assert_eq!(error.to_string(), "Agency not found: NOPE");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reference data file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Reference data file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reference data parsed but is structurally inconsistent.
    #[error("Invalid dataset: {message}")]
    InvalidDataset {
        /// A description of the inconsistency.
        message: String,
    },

    /// The requested agency code is not present in the dataset.
    #[error("Agency not found: {code}")]
    UnknownAgency {
        /// The agency code that was not found.
        code: String,
    },

    /// No salary is recorded for the requested classification.
    #[error("Salary not found for agency '{agency}' level '{level}' step '{step}'")]
    SalaryNotFound {
        /// The agency code.
        agency: String,
        /// The classification level (e.g. "APS6").
        level: String,
        /// The increment within the level (e.g. "Step 1").
        step: String,
    },

    /// A projected salary no longer fits the decimal range.
    #[error("Projected salary out of range in {year}")]
    SalaryOutOfRange {
        /// The year whose update overflowed.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
