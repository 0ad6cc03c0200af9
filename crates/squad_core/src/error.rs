//! Error types for the domain model.

use thiserror::Error;

/// Result type for domain operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A birth-year range string did not match the `YYYY-YYYY` form.
    #[error("birth year range must be formatted as YYYY-YYYY, got {input:?}")]
    InvalidBirthYearRange {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CoreError::InvalidBirthYearRange {
            input: "1992".into(),
        };
        assert!(err.to_string().contains("YYYY-YYYY"));
        assert!(err.to_string().contains("1992"));
    }
}
