//! Error Types
//!
//! Structured error type for the whole crate, built with `thiserror` so
//! that I/O and workbook errors convert automatically via `?`.

use thiserror::Error;

/// Error type used across the ddcheck crate.
///
/// The invalid-parameter variants are raised synchronously by the
/// non-interactive entry points before any file is written; generation is
/// all-or-nothing. The interactive shell prevents invalid selections by
/// construction and never surfaces them.
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// Deal type string not in the fixed enumeration.
    #[error("invalid deal type '{0}': must be one of Asset Deal, Share Deal, Merger")]
    InvalidDealType(String),

    /// Sector string not in the fixed enumeration.
    #[error("invalid sector '{0}': must be one of Healthcare, Technology, Industrial, Real Estate, Financial Services, Retail")]
    InvalidSector(String),

    /// Jurisdiction string not in the fixed enumeration.
    #[error("invalid jurisdiction '{0}': must be one of Portugal, Espanha, Internacional")]
    InvalidJurisdiction(String),

    /// Language string other than `EN` or `PT`.
    #[error("invalid language '{0}': must be EN or PT")]
    InvalidLanguage(String),

    /// Category string not in the fixed 8-value enumeration.
    #[error("invalid category '{0}': must be one of Legal, Financial, Operational, Tax, HR, Commercial, IP, Compliance")]
    InvalidCategory(String),

    /// Priority string other than High, Medium or Low.
    #[error("invalid priority '{0}': must be one of High, Medium, Low")]
    InvalidPriority(String),

    /// The target company name was empty (or whitespace only).
    #[error("target company name must not be empty")]
    EmptyTarget,

    /// A required generation parameter was never supplied to the builder.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// I/O failure while writing the output file.
    ///
    /// Propagated as-is; there is no retry or partial-failure handling.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the workbook writer.
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn invalid_parameter_messages_name_the_offending_value() {
        let err = ChecklistError::InvalidDealType("Spin-off".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Spin-off"));
        assert!(msg.contains("Share Deal"));

        let err = ChecklistError::InvalidSector("Mining".to_string());
        assert!(err.to_string().contains("Mining"));

        let err = ChecklistError::InvalidLanguage("FR".to_string());
        assert!(err.to_string().contains("must be EN or PT"));
    }

    #[test]
    fn io_error_converts_with_question_mark() {
        fn open_missing() -> Result<(), ChecklistError> {
            let _file = std::fs::File::open("no_such_file.xlsx")?;
            Ok(())
        }

        match open_missing() {
            Err(ChecklistError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn missing_parameter_display() {
        let err = ChecklistError::MissingParameter("sector");
        assert_eq!(err.to_string(), "missing required parameter: sector");
    }
}
