//! Mermend - rule-based repair and validation for Mermaid diagrams.
//!
//! Model-generated Mermaid source is often almost right: labels with
//! unquoted special characters, spaces inside arrow label pipes, `:::class`
//! on subgraphs, markdown fences left in place. This crate fixes the common
//! cases with an ordered pipeline of textual rules and reports on the rest
//! without modifying anything.
//!
//! The two entry points are [`validate_and_fix`] and
//! [`get_validation_report`]; [`Fixer`] and [`Reporter`] expose the same
//! behavior with explicit configuration.

pub mod config;
pub mod extract;
pub mod links;
pub mod rules;

mod error;
mod fixer;
mod patterns;
mod report;

pub use mermend_core::{
    Finding, FixEntry, FixKind, FixRecord, RuleCode, Severity, Span, ValidationReport,
};

pub use error::MermendError;
pub use fixer::{Fixed, Fixer};
pub use patterns::{DIAGRAM_KEYWORDS, diagram_keyword, first_content_line};
pub use report::Reporter;

use std::panic::{self, AssertUnwindSafe};

use log::{info, warn};

/// Repair `diagram` with the default configuration.
///
/// Returns the corrected text and one human-readable message per rule that
/// fired, in pipeline order. Empty input comes back unchanged with a single
/// warning message.
///
/// # Examples
///
/// ```
/// let (fixed, fixes) = mermend::validate_and_fix(
///     "graph TD\n    A[/api/endpoint] -->| \"calls\" | B",
/// );
///
/// assert_eq!(fixed, "graph TD\nA[\"/api/endpoint\"] -->|\"calls\"| B");
/// assert_eq!(fixes.len(), 2);
/// ```
pub fn validate_and_fix(diagram: &str) -> (String, Vec<String>) {
    let (text, record) = Fixer::default().fix(diagram).into_parts();
    if record.has_fixes() {
        info!(fixes = record.fixes().count(); "Applied diagram fixes");
    }
    (text, record.into())
}

/// Inspect `diagram` with the default configuration.
///
/// # Examples
///
/// ```
/// let report = mermend::get_validation_report("A --> B");
///
/// assert!(!report.valid());
/// assert_eq!(report.issues(), ["Missing or invalid diagram type declaration"]);
/// ```
pub fn get_validation_report(diagram: &str) -> ValidationReport {
    Reporter::default().report(diagram)
}

/// Run `fixer` over `text`, falling back to the input if a rule panics.
///
/// A diagram that cannot be repaired should still reach the renderer in its
/// original form; the returned record is empty in that case.
pub fn fix_or_passthrough(fixer: &Fixer, text: &str) -> Fixed {
    match panic::catch_unwind(AssertUnwindSafe(|| fixer.fix(text))) {
        Ok(fixed) => fixed,
        Err(_) => {
            warn!(len = text.len(); "Fixer panicked, passing diagram through unchanged");
            Fixed::passthrough(text)
        }
    }
}
