//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Salary arithmetic itself is total over its inputs, so the only failure
//! the engine can encounter is the output collaborator rejecting a write
//! while a roster report is being produced.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
/// use std::io;
///
/// let error = PayrollError::ReportWrite {
///     source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Failed to write employee report: broken pipe"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The output collaborator rejected a write during roster reporting.
    #[error("Failed to write employee report: {source}")]
    ReportWrite {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
