//! The ordered repair pipeline.
//!
//! Each rule is an independent function taking the working text and
//! returning the rewritten text, appending to the [`FixRecord`] only when
//! it changed something. Rules run in table order; later rules rely on the
//! normalization done by earlier ones (quoting before further matching on
//! quoted text, spacing before label quoting).

mod arrows;
mod document;
mod identifiers;
mod labels;
mod subgraphs;

pub(crate) use identifiers::declared_identifiers;

use mermend_core::{FixRecord, RuleCode};

use crate::config::FixerConfig;

/// Signature shared by every pipeline rule.
pub(crate) type RuleFn = fn(&str, &FixerConfig, &mut FixRecord) -> String;

/// One step of the repair pipeline.
#[derive(Clone, Copy)]
pub struct Rule {
    code: RuleCode,
    name: &'static str,
    apply: RuleFn,
}

impl Rule {
    const fn new(code: RuleCode, name: &'static str, apply: RuleFn) -> Self {
        Self { code, name, apply }
    }

    /// The rule's code.
    pub fn code(&self) -> RuleCode {
        self.code
    }

    /// A short kebab-case name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn apply(&self, text: &str, config: &FixerConfig, record: &mut FixRecord) -> String {
        (self.apply)(text, config, record)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("code", &self.code)
            .field("name", &self.name)
            .finish()
    }
}

/// Every rule, in execution order.
pub const PIPELINE: &[Rule] = &[
    Rule::new(RuleCode::M001, "arrow-label-spacing", arrows::fix_label_spacing),
    Rule::new(RuleCode::M002, "subgraph-class", subgraphs::strip_class),
    Rule::new(RuleCode::M003, "identifier-characters", identifiers::rewrite),
    Rule::new(RuleCode::M004, "node-label-quotes", labels::quote_reserved),
    Rule::new(RuleCode::M005, "arrow-label-quotes", arrows::quote_labels),
    Rule::new(RuleCode::M006, "diagram-header", document::insert_header),
    Rule::new(RuleCode::M007, "arrow-glyphs", arrows::repair_glyphs),
    Rule::new(RuleCode::M008, "classdef-properties", document::check_class_defs),
    Rule::new(RuleCode::M009, "single-quotes", labels::normalize_single_quotes),
    Rule::new(RuleCode::M010, "code-fences", document::strip_fences),
    Rule::new(RuleCode::M011, "subgraph-id-prefix", subgraphs::strip_id_prefix),
    Rule::new(RuleCode::M012, "plain-labels", labels::quote_plain),
    Rule::new(RuleCode::M013, "whitespace", document::normalize_whitespace),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_runs_in_code_order() {
        assert_eq!(PIPELINE.len(), 13);
        assert!(PIPELINE.windows(2).all(|w| w[0].code() < w[1].code()));
        assert_eq!(PIPELINE[0].name(), "arrow-label-spacing");
        assert_eq!(PIPELINE[12].code(), RuleCode::M013);
    }
}
