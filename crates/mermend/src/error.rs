//! Error types for mermend operations.
//!
//! The fixer and the reporter themselves never fail; [`MermendError`]
//! covers the work around them, such as reading input or rejecting an
//! invalid report.

use std::io;

use thiserror::Error;

use mermend_core::ValidationReport;

/// The main error type for mermend operations.
///
/// # Diagnostic Variants
///
/// The `Lint` variant carries the full report together with the source it
/// was computed from, so front ends can render each finding against its
/// span.
#[derive(Debug, Error)]
pub enum MermendError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Extraction error: {0}")]
    Extract(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Diagram is invalid: {} issue(s), {} warning(s)", report.issue_count(), report.warning_count())]
    Lint {
        report: ValidationReport,
        src: String,
    },
}

impl MermendError {
    /// Create a new `Lint` error with the associated source text.
    pub fn new_lint_error(report: ValidationReport, src: impl Into<String>) -> Self {
        Self::Lint {
            report,
            src: src.into(),
        }
    }
}
