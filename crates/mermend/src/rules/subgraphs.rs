//! Subgraph declaration rules.

use mermend_core::{FixRecord, RuleCode};

use crate::{
    config::FixerConfig,
    patterns::{self, group},
};

/// `subgraph "Layer":::style` becomes `subgraph "Layer"`.
pub(super) fn strip_class(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    let fixed = patterns::subgraph_class().replace_all(text, "${1}");
    if fixed != text {
        record.fixed(
            RuleCode::M002,
            "Removed invalid class styling from subgraph declarations",
        );
    }
    fixed.into_owned()
}

/// `subgraph api "API"` and `subgraph api[API]` become `subgraph "API"`.
pub(super) fn strip_id_prefix(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    let fixed = patterns::subgraph_id_label().replace_all(text, |caps: &regex::Captures<'_>| {
        let label = (2..=4)
            .find_map(|i| caps.get(i))
            .map_or("", |m| m.as_str())
            .trim();
        format!("{}subgraph \"{label}\"", group(caps, 1))
    });
    if fixed != text {
        record.fixed(
            RuleCode::M011,
            "Removed identifier prefix from labeled subgraph declarations",
        );
    }
    fixed.into_owned()
}
