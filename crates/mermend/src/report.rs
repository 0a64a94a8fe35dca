//! The reporter: read-only validity checks.
//!
//! The reporter shares its patterns and predicates with the repair rules,
//! so every issue it raises (other than the diagnostic-only checks) is one
//! the fixer knows how to repair.

use regex::{Captures, Regex};

use mermend_core::{Finding, RuleCode, Severity, Span, ValidationReport};

use crate::{
    config::ReportConfig,
    patterns::{self, group},
    rules,
};

/// Inspects diagram text and produces a [`ValidationReport`].
///
/// # Examples
///
/// ```
/// use mermend::Reporter;
///
/// let report = Reporter::default().report("flowchart TD\n    A[\"Node A\"] --> B[\"Node B\"]");
/// assert!(report.valid());
/// assert_eq!(report.issue_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    /// Create a new reporter with the given configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Run every check over `diagram`. The input is never modified.
    pub fn report(&self, diagram: &str) -> ValidationReport {
        if diagram.trim().is_empty() {
            return ValidationReport::from_findings(vec![Finding::issue(
                RuleCode::M100,
                "Diagram is empty",
            )]);
        }

        let mut findings = Vec::new();
        check_header(diagram, &mut findings);
        check_fences(diagram, &mut findings);
        check_subgraph_class(diagram, &mut findings);
        check_arrow_spacing(diagram, &mut findings);
        self.check_identifiers(diagram, &mut findings);
        check_node_labels(diagram, &mut findings);
        check_arrow_labels(diagram, &mut findings);
        check_single_quotes(diagram, &mut findings);
        check_arrow_glyphs(diagram, &mut findings);
        check_subgraph_id_prefix(diagram, &mut findings);
        check_class_defs(diagram, &mut findings);

        ValidationReport::from_findings(findings)
    }

    fn check_identifiers(&self, diagram: &str, findings: &mut Vec<Finding>) {
        let ids = rules::declared_identifiers(diagram);
        let Some(first) = ids.first() else {
            return;
        };
        let span = patterns::dotted_identifier()
            .captures_iter(diagram)
            .filter_map(|caps| caps.get(1))
            .find(|m| m.as_str() == first.as_str())
            .map(|m| Span::new(m.range()));
        let message = format!(
            "Node IDs contain special characters: {}",
            ids.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        );
        let finding = match Severity::from(self.config.identifier_severity()) {
            Severity::Issue => Finding::issue(RuleCode::M003, message),
            Severity::Warning => Finding::warning(RuleCode::M003, message),
        }
        .with_help("replace dashes and dots in identifiers with underscores");
        findings.push(with_span(finding, span));
    }
}

fn with_span(finding: Finding, span: Option<Span>) -> Finding {
    match span {
        Some(span) => finding.with_span(span),
        None => finding,
    }
}

/// Span of the first match of `re` outside quotes that satisfies `accept`.
fn first_unquoted<F>(re: &'static Regex, text: &str, mut accept: F) -> Option<Span>
where
    F: FnMut(&Captures<'_>) -> bool,
{
    patterns::unquoted_captures(re, text)
        .find(|caps| accept(caps))
        .and_then(|caps| caps.get(0))
        .map(|m| Span::new(m.range()))
}

fn check_header(diagram: &str, findings: &mut Vec<Finding>) {
    if patterns::diagram_keyword(diagram).is_some() {
        return;
    }
    let span = patterns::first_content_line(diagram).and_then(|line| {
        diagram
            .find(line)
            .map(|start| Span::new(start..start + line.len()))
    });
    findings.push(with_span(
        Finding::issue(
            RuleCode::M006,
            "Missing or invalid diagram type declaration",
        )
        .with_help("start the diagram with a type such as `flowchart TD`"),
        span,
    ));
}

fn check_fences(diagram: &str, findings: &mut Vec<Finding>) {
    if let Some(m) = patterns::code_fence().find(diagram) {
        findings.push(
            Finding::issue(RuleCode::M010, "Markdown code fences present")
                .with_span(Span::new(m.range()))
                .with_help("remove the ``` markers around the diagram"),
        );
    }
}

fn check_subgraph_class(diagram: &str, findings: &mut Vec<Finding>) {
    if let Some(m) = patterns::subgraph_class().find(diagram) {
        findings.push(
            Finding::issue(RuleCode::M002, "Subgraph has invalid class styling (:::)")
                .with_span(Span::new(m.range()))
                .with_help("subgraphs cannot take a `:::class` suffix"),
        );
    }
}

fn check_arrow_spacing(diagram: &str, findings: &mut Vec<Finding>) {
    let re = patterns::arrow_label_spacing();

    let padded = first_unquoted(re, diagram, |caps| {
        !group(caps, 3).is_empty() || !group(caps, 5).is_empty()
    });
    if let Some(span) = padded {
        findings.push(
            Finding::issue(
                RuleCode::M001,
                "Arrow labels have incorrect spacing around pipes",
            )
            .with_span(span)
            .with_help("write labels as -->|\"text\"| with no spaces inside the pipes"),
        );
    }

    let gapped = first_unquoted(re, diagram, |caps| !group(caps, 2).is_empty());
    if let Some(span) = gapped {
        findings.push(
            Finding::issue(RuleCode::M101, "Arrows have a space before the label pipe")
                .with_span(span)
                .with_help("attach the label directly: -->|\"text\"|"),
        );
    }
}

fn check_node_labels(diagram: &str, findings: &mut Vec<Finding>) {
    if !patterns::is_flowchart_like(diagram) {
        return;
    }
    let span = first_unquoted(patterns::node_label(), diagram, |caps| {
        patterns::node_label_needs_quotes(group(caps, 2))
    });
    if let Some(span) = span {
        findings.push(
            Finding::issue(
                RuleCode::M004,
                "Node labels contain special characters without quotes",
            )
            .with_span(span)
            .with_help("wrap the label in double quotes: A[\"label\"]"),
        );
    }
}

fn check_arrow_labels(diagram: &str, findings: &mut Vec<Finding>) {
    let span = first_unquoted(patterns::arrow_bare_label(), diagram, |caps| {
        patterns::arrow_label_needs_quotes(group(caps, 2))
    });
    if let Some(span) = span {
        findings.push(
            Finding::issue(
                RuleCode::M005,
                "Arrow labels contain special characters without quotes",
            )
            .with_span(span)
            .with_help("wrap the label in double quotes: -->|\"label\"|"),
        );
    }
}

fn check_single_quotes(diagram: &str, findings: &mut Vec<Finding>) {
    let span = first_unquoted(patterns::single_quoted_node(), diagram, |_| true)
        .or_else(|| first_unquoted(patterns::single_quoted_arrow(), diagram, |_| true));
    if let Some(span) = span {
        findings.push(
            Finding::issue(RuleCode::M009, "Labels use single quotes instead of double quotes")
                .with_span(span),
        );
    }
}

fn check_arrow_glyphs(diagram: &str, findings: &mut Vec<Finding>) {
    let mut span = [
        patterns::underscore_arrow(),
        patterns::overlong_head(),
        patterns::overlong_tail(),
    ]
    .into_iter()
    .find_map(|re| first_unquoted(re, diagram, |_| true));

    if span.is_none() && patterns::is_flowchart_like(diagram) {
        span = patterns::single_dash_arrows(diagram)
            .first()
            .map(|&pos| Span::new(pos..pos + 2));
    }

    if let Some(span) = span {
        findings.push(
            Finding::issue(
                RuleCode::M007,
                "Arrows use invalid syntax (underscore, overlong or single-dash glyphs)",
            )
            .with_span(span)
            .with_help("use -->, <--, ==>, <== or -.->"),
        );
    }
}

fn check_subgraph_id_prefix(diagram: &str, findings: &mut Vec<Finding>) {
    if let Some(m) = patterns::subgraph_id_label().find(diagram) {
        findings.push(
            Finding::issue(
                RuleCode::M011,
                "Subgraph declares both an identifier and a label",
            )
            .with_span(Span::new(m.range()))
            .with_help("use either `subgraph id` or `subgraph \"label\"`"),
        );
    }
}

fn check_class_defs(diagram: &str, findings: &mut Vec<Finding>) {
    for caps in patterns::class_def().captures_iter(diagram) {
        let properties = group(&caps, 2);
        if properties.contains("fill:") && properties.contains("stroke:") {
            continue;
        }
        let finding = Finding::warning(
            RuleCode::M008,
            format!(
                "classDef '{}' may be missing fill/stroke/color properties",
                group(&caps, 1)
            ),
        );
        findings.push(with_span(
            finding,
            caps.get(0).map(|m| Span::new(m.range())),
        ));
    }
}
