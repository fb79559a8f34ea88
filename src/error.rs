//! Error type for loading, validating and exporting CMA reports
//!
//! The projection engine itself never fails; these errors come from the I/O
//! edges and from upstream input validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },
}

impl CmaError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CmaError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type CmaResult<T> = Result<T, CmaError>;
