//! Whole-document rules: header, classDef check, fences, whitespace.

use mermend_core::{FixRecord, RuleCode};

use crate::{
    config::FixerConfig,
    patterns::{self, group},
};

/// Prepend the configured header when the first content line names a
/// flowchart but does not declare one.
pub(super) fn insert_header(text: &str, config: &FixerConfig, record: &mut FixRecord) -> String {
    let Some(first) = patterns::first_content_line(text) else {
        return text.to_string();
    };
    if patterns::diagram_keyword(text).is_some() || !patterns::mentions_flowchart(first) {
        return text.to_string();
    }

    record.fixed(RuleCode::M006, "Added missing diagram type declaration");
    format!("{}\n{text}", config.header())
}

/// Warn about style classes lacking `fill:` or `stroke:`. Never rewrites.
pub(super) fn check_class_defs(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    for caps in patterns::class_def().captures_iter(text) {
        let properties = group(&caps, 2);
        if !(properties.contains("fill:") && properties.contains("stroke:")) {
            record.warn(
                RuleCode::M008,
                format!(
                    "classDef '{}' may be missing fill/stroke/color properties",
                    group(&caps, 1)
                ),
            );
        }
    }
    text.to_string()
}

/// Remove every ```` ``` ```` marker, with or without a language tag.
pub(super) fn strip_fences(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    let fixed = patterns::code_fence().replace_all(text, "");
    if fixed != text {
        record.fixed(RuleCode::M010, "Removed markdown code fences");
    }
    fixed.into_owned()
}

/// Trim every line and drop blank ones. Not recorded.
pub(super) fn normalize_whitespace(
    text: &str,
    _config: &FixerConfig,
    _record: &mut FixRecord,
) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
