//! Configuration types for the fixer and the reporter.
//!
//! All types implement [`serde::Deserialize`] so front ends can load them
//! from TOML or any other serde format. Missing fields fall back to the
//! defaults shown below.
//!
//! # Example
//!
//! ```
//! # use mermend::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.fixer().header(), "flowchart TD");
//! assert!(config.fixer().quote_plain_labels());
//! ```

use serde::Deserialize;

use mermend_core::Severity;

/// Top-level configuration combining fixer and report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Fixer configuration section.
    #[serde(default)]
    fixer: FixerConfig,

    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Returns the fixer configuration.
    pub fn fixer(&self) -> &FixerConfig {
        &self.fixer
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Settings for the repair pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixerConfig {
    /// Header line prepended when a flowchart lacks its type declaration.
    header: String,

    /// Whether the best-effort pass quotes every remaining bare label.
    quote_plain_labels: bool,
}

impl FixerConfig {
    /// Returns the header line inserted for headerless flowcharts.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns `true` if bare bracket labels are quoted.
    pub fn quote_plain_labels(&self) -> bool {
        self.quote_plain_labels
    }

    /// Replace the inserted header line.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Enable or disable quoting of bare bracket labels.
    pub fn with_quote_plain_labels(mut self, enabled: bool) -> Self {
        self.quote_plain_labels = enabled;
        self
    }
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            header: "flowchart TD".to_string(),
            quote_plain_labels: true,
        }
    }
}

/// Severity the reporter assigns to dash- or dot-bearing identifiers.
///
/// Such identifiers often still render, so they default to a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierSeverity {
    /// Report as an issue, making the diagram invalid.
    Issue,

    /// Report as a warning.
    #[default]
    Warning,
}

impl From<IdentifierSeverity> for Severity {
    fn from(severity: IdentifierSeverity) -> Self {
        match severity {
            IdentifierSeverity::Issue => Severity::Issue,
            IdentifierSeverity::Warning => Severity::Warning,
        }
    }
}

/// Settings for the reporter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Severity of dash- or dot-bearing identifiers.
    identifier_severity: IdentifierSeverity,
}

impl ReportConfig {
    /// Returns the severity used for dash- or dot-bearing identifiers.
    pub fn identifier_severity(&self) -> IdentifierSeverity {
        self.identifier_severity
    }

    /// Replace the identifier severity.
    pub fn with_identifier_severity(mut self, severity: IdentifierSeverity) -> Self {
        self.identifier_severity = severity;
        self
    }
}
