//! Node label rules: reserved-character quoting, quote normalization and
//! the best-effort quoting pass.

use mermend_core::{FixRecord, RuleCode};

use crate::{
    config::FixerConfig,
    patterns::{self, group},
};

/// `A[/api/endpoint]` becomes `A["/api/endpoint"]`.
///
/// Shape forms such as `[(db)]` or `[/in/]` and single-quoted labels are
/// left for later rules. Only flowcharts carry node labels.
pub(super) fn quote_reserved(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    if !patterns::is_flowchart_like(text) {
        return text.to_string();
    }
    let fixed = patterns::replace_unquoted(patterns::node_label(), text, |caps| {
        let label = group(caps, 2);
        patterns::node_label_needs_quotes(label)
            .then(|| format!("{}[\"{}\"]", group(caps, 1), label.trim()))
    });
    if fixed != text {
        record.fixed(
            RuleCode::M004,
            "Added quotes to node labels with special characters",
        );
    }
    fixed
}

/// `A['x']` and `-->|'x'|` become `A["x"]` and `-->|"x"|`.
pub(super) fn normalize_single_quotes(
    text: &str,
    _config: &FixerConfig,
    record: &mut FixRecord,
) -> String {
    let nodes = patterns::replace_unquoted(patterns::single_quoted_node(), text, |caps| {
        let (open, close, index) = match group(caps, 0).chars().next() {
            Some('(') => ('(', ')', 2),
            Some('{') => ('{', '}', 3),
            _ => ('[', ']', 1),
        };
        Some(format!("{open}\"{}\"{close}", group(caps, index)))
    });
    let fixed = patterns::replace_unquoted(patterns::single_quoted_arrow(), &nodes, |caps| {
        Some(format!("|\"{}\"|", group(caps, 1)))
    });
    if fixed != text {
        record.fixed(
            RuleCode::M009,
            "Converted single-quoted labels to double quotes",
        );
    }
    fixed
}

/// Quote every remaining bare `ID[label]`.
pub(super) fn quote_plain(text: &str, config: &FixerConfig, record: &mut FixRecord) -> String {
    if !config.quote_plain_labels() || !patterns::is_flowchart_like(text) {
        return text.to_string();
    }
    let fixed = patterns::replace_unquoted(patterns::plain_node_label(), text, |caps| {
        let label = group(caps, 2).trim();
        (!label.is_empty() && !patterns::is_single_quoted(label))
            .then(|| format!("{}[\"{label}\"]", group(caps, 1)))
    });
    if fixed != text {
        record.fixed(RuleCode::M012, "Added quotes to unquoted node labels");
    }
    fixed
}
