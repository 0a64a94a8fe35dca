//! Error adapter for converting MermendError to miette diagnostics.
//!
//! This module provides the bridge between the library's error and report
//! types and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Finding Support
//!
//! A [`MermendError::Lint`] carries a full report; each of its findings is
//! rendered independently against the diagram source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use mermend::{Finding, MermendError, Severity, Span};

/// Adapter for a single reporter finding.
pub struct FindingAdapter<'a> {
    /// The wrapped finding
    finding: &'a Finding,
    /// Diagram source for displaying snippets
    src: &'a str,
}

impl<'a> FindingAdapter<'a> {
    /// Create a new finding adapter.
    pub fn new(finding: &'a Finding, src: &'a str) -> Self {
        Self { finding, src }
    }
}

impl fmt::Debug for FindingAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindingAdapter")
            .field("finding", &self.finding)
            .finish()
    }
}

impl fmt::Display for FindingAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.finding.message())
    }
}

impl std::error::Error for FindingAdapter<'_> {}

impl MietteDiagnostic for FindingAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.finding.code()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.finding.severity() {
            Severity::Issue => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.finding
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.finding.span()?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.finding.code().description().to_string()),
            span_to_miette(span),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`MermendError`] variants without findings.
pub struct ErrorAdapter<'a>(pub &'a MermendError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MermendError::Io(_) => "mermend::io",
            MermendError::Config(_) => "mermend::config",
            MermendError::Extract(_) => "mermend::extract",
            MermendError::Serialize(_) => "mermend::serialize",
            MermendError::Lint { .. } => "mermend::lint",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            MermendError::Extract(_) => Some(Box::new(
                "the response must contain a ``` or ```mermaid fenced block",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A finding with source location information.
    Finding(FindingAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Finding(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Finding(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Finding(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Finding(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Finding(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Finding(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Finding(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a mermend [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`MermendError`] into a list of reportable errors.
///
/// For [`MermendError::Lint`], this returns one [`Reportable`] for each
/// finding in the report. For other error variants, this returns a single
/// [`Reportable`].
pub fn to_reportables(err: &MermendError) -> Vec<Reportable<'_>> {
    match err {
        MermendError::Lint { report, src } if !report.findings().is_empty() => report
            .findings()
            .iter()
            .map(|f| Reportable::Finding(FindingAdapter::new(f, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use mermend::{RuleCode, ValidationReport};

    use super::*;

    #[test]
    fn test_lint_error_yields_one_reportable_per_finding() {
        let src = "flowchart TD\nA[/api] -->| x | B";
        let report = ValidationReport::from_findings(vec![
            Finding::issue(RuleCode::M004, "Node labels contain special characters without quotes")
                .with_span(Span::new(13..20)),
            Finding::warning(RuleCode::M008, "classDef 'x' may be missing fill/stroke/color properties"),
        ]);
        let err = MermendError::new_lint_error(report, src);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert_eq!(
            reportables[0].to_string(),
            "Node labels contain special characters without quotes"
        );
        assert_eq!(
            reportables[0].severity(),
            Some(miette::Severity::Error)
        );
        assert_eq!(
            reportables[1].severity(),
            Some(miette::Severity::Warning)
        );
    }

    #[test]
    fn test_finding_label_uses_span() {
        let finding = Finding::issue(RuleCode::M002, "Subgraph has invalid class styling (:::)")
            .with_span(Span::new(4..10));
        let adapter = FindingAdapter::new(&finding, "abc subgraph x:::y");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[0].len(), 6);
        assert!(labels[0].primary());
        assert_eq!(labels[0].label(), Some("subgraph class styling"));
        assert_eq!(adapter.code().unwrap().to_string(), "M002");
    }

    #[test]
    fn test_finding_without_span_has_no_labels() {
        let finding = Finding::issue(RuleCode::M100, "Diagram is empty");
        let adapter = FindingAdapter::new(&finding, "");
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_non_lint_error() {
        let err = MermendError::Extract("no fenced block".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Extraction error: no fenced block");
                assert_eq!(e.code().unwrap().to_string(), "mermend::extract");
                assert!(e.help().is_some());
            }
            Reportable::Finding(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_serialize_error_code() {
        let err = MermendError::Serialize("key must be a string".to_string());

        match &to_reportables(&err)[0] {
            Reportable::Error(e) => {
                assert_eq!(e.code().unwrap().to_string(), "mermend::serialize");
                assert!(e.help().is_none());
            }
            Reportable::Finding(_) => panic!("Expected Error"),
        }
    }
}
