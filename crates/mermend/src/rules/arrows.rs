//! Arrow rules: label spacing, label quoting and glyph repair.

use mermend_core::{FixRecord, RuleCode};

use crate::{
    config::FixerConfig,
    patterns::{self, group},
};

/// `A -->| "text" | B` becomes `A -->|"text"| B`.
pub(super) fn fix_label_spacing(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    let fixed = patterns::replace_unquoted(patterns::arrow_label_spacing(), text, |caps| {
        Some(format!("{}|{}|", group(caps, 1), group(caps, 4)))
    });
    if fixed != text {
        record.fixed(
            RuleCode::M001,
            "Fixed arrow label spacing (removed spaces around pipes)",
        );
    }
    fixed
}

/// `A -->|calls func()| B` becomes `A -->|"calls func()"| B`.
pub(super) fn quote_labels(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    let fixed = patterns::replace_unquoted(patterns::arrow_bare_label(), text, |caps| {
        let label = group(caps, 2);
        patterns::arrow_label_needs_quotes(label)
            .then(|| format!("{}|\"{}\"|", group(caps, 1), label.trim()))
    });
    if fixed != text {
        record.fixed(
            RuleCode::M005,
            "Added quotes to arrow labels with special characters",
        );
    }
    fixed
}

/// Rewrite malformed arrow glyphs to their two-character forms.
///
/// Each glyph family that changed gets its own record entry. Single-dash
/// arrows are left alone outside flowcharts, where `->` and `->>` are valid.
pub(super) fn repair_glyphs(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    let collapsed = collapse_overlong(text);
    if collapsed != text {
        record.fixed(RuleCode::M007, "Fixed arrow syntax (---> to -->)");
    }

    let replaced = patterns::replace_unquoted(patterns::underscore_arrow(), &collapsed, |caps| {
        Some(underscore_replacement(group(caps, 0)).to_string())
    });
    if replaced != collapsed {
        record.fixed(RuleCode::M007, "Fixed arrow syntax (__> to -->)");
    }

    if !patterns::is_flowchart_like(&replaced) {
        return replaced;
    }
    let doubled = double_single_dashes(&replaced);
    if doubled != replaced {
        record.fixed(RuleCode::M007, "Fixed arrow syntax (-> to -->)");
    }
    doubled
}

fn collapse_overlong(text: &str) -> String {
    let heads = patterns::replace_unquoted(patterns::overlong_head(), text, |caps| {
        Some(format!("{}{}>", group(caps, 1), two_of(group(caps, 2))))
    });
    patterns::replace_unquoted(patterns::overlong_tail(), &heads, |caps| {
        Some(format!("<{}", two_of(group(caps, 1))))
    })
}

fn two_of(run: &str) -> &'static str {
    if run.starts_with('=') { "==" } else { "--" }
}

fn underscore_replacement(glyph: &str) -> &'static str {
    if glyph.starts_with("<<") {
        "<=="
    } else if glyph.ends_with(">>") {
        "==>"
    } else if glyph == "<_._" {
        "<-.-"
    } else if glyph == "_._>" {
        "-.->"
    } else if glyph.starts_with('<') {
        "<--"
    } else {
        "-->"
    }
}

fn double_single_dashes(text: &str) -> String {
    let positions = patterns::single_dash_arrows(text);
    if positions.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + positions.len());
    let mut last = 0;
    for pos in positions {
        out.push_str(&text[last..pos]);
        out.push_str("-->");
        last = pos + 2;
    }
    out.push_str(&text[last..]);
    out
}
