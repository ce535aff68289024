//! Report error types.

use chrono::NaiveDate;
use razonete_shared::AppError;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Requested period range is inverted.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The scope has no accounts to report on.
    #[error("No accounts found for the requested scope")]
    NoAccounts,

    /// Failure from the storage collaborator.
    #[error(transparent)]
    App(#[from] AppError),
}

impl ReportError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::NoAccounts => "NO_ACCOUNTS",
            Self::App(e) => e.error_code(),
        }
    }
}
