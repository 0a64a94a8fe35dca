//! The reporter's validity summary.

use serde::Serialize;

use crate::{Finding, Severity};

/// Structured validity report for a diagram.
///
/// `valid` is true exactly when there are no issues; warnings never affect
/// validity. Serializes with camelCase keys:
///
/// ```
/// # use mermend_core::{Finding, RuleCode, ValidationReport};
/// let report = ValidationReport::from_findings(vec![
///     Finding::warning(RuleCode::M003, "Node IDs contain special characters: a-b"),
/// ]);
/// assert!(report.valid());
/// assert_eq!(report.warning_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    valid: bool,
    issues: Vec<String>,
    warnings: Vec<String>,
    issue_count: usize,
    warning_count: usize,
    #[serde(skip)]
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// Build a report from findings, preserving their order.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let messages = |severity: Severity| -> Vec<String> {
            findings
                .iter()
                .filter(|f| f.severity() == severity)
                .map(|f| f.message().to_string())
                .collect()
        };
        let issues = messages(Severity::Issue);
        let warnings = messages(Severity::Warning);

        Self {
            valid: issues.is_empty(),
            issue_count: issues.len(),
            warning_count: warnings.len(),
            issues,
            warnings,
            findings,
        }
    }

    /// Returns `true` if the report holds no issues.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Issue messages in check order.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Warning messages in check order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Number of issues.
    pub fn issue_count(&self) -> usize {
        self.issue_count
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// The underlying findings, issues and warnings interleaved in check order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}
