//! Shared patterns and constants for the fixer and the reporter.
//!
//! Every regex is compiled once into a [`OnceLock`] static. Both the rules
//! and the reporter go through these accessors so a check and its repair
//! can never disagree about what they match.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Characters that force a label into double quotes.
pub const RESERVED_LABEL_CHARS: &str = "/(){}[]:;,.!?@#$%^&*+=<>-|";

/// Keywords that may open a diagram.
pub const DIAGRAM_KEYWORDS: &[&str] = &[
    "graph",
    "flowchart",
    "flowchart-elk",
    "sequenceDiagram",
    "classDiagram",
    "classDiagram-v2",
    "stateDiagram",
    "stateDiagram-v2",
    "erDiagram",
    "gitGraph",
    "journey",
    "gantt",
    "pie",
    "quadrantChart",
    "requirementDiagram",
    "C4Context",
    "C4Container",
    "C4Component",
    "C4Dynamic",
    "C4Deployment",
    "mindmap",
    "timeline",
    "sankey-beta",
    "xychart-beta",
    "block-beta",
    "packet-beta",
    "architecture-beta",
    "kanban",
];

/// Opening and closing characters of bracket shapes such as `[(db)]`.
const SHAPE_DELIMITERS: &[(char, char)] = &[('(', ')'), ('/', '/'), ('\\', '\\'), ('/', '\\'), ('\\', '/')];

/// Arrow glyph, including malformed ones still awaiting repair.
const ARROW: &str = r"(<{0,2}[-=_.]{2,}>{0,2}|<{0,2}[-=_.]>{1,2})";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// `ARROW <gap> | <pad> label <pad> |` with quoted, single-quoted or bare labels.
pub(crate) fn arrow_label_spacing() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        compile(&format!(
            r#"{ARROW}([ \t]*)\|([ \t]*)("[^"\n]*"|'[^'\n]*'|[^|"'\n]*?)([ \t]*)\|"#
        ))
    })
}

/// `ARROW|label|` where the label is not double-quoted.
pub(crate) fn arrow_bare_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&format!(r#"{ARROW}\|([^|"\n]+)\|"#)))
}

/// A subgraph line ending in a `:::class` suffix.
pub(crate) fn subgraph_class() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"(?m)^([ \t]*subgraph\b[^\n]*?)[ \t]*:::[^\n]*$"))
}

/// A subgraph with both an identifier and a label.
pub(crate) fn subgraph_id_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        compile(
            r#"(?m)^([ \t]*)subgraph[ \t]+[A-Za-z0-9_.-]+[ \t]*(?:"([^"\n]*)"|\[[ \t]*"([^"\n]*)"[ \t]*\]|\[([^\]"\n]*)\])[ \t\r]*$"#,
        )
    })
}

/// A line-leading node declaration whose identifier carries `-` or `.`.
pub(crate) fn dotted_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        compile(r"(?m)^[ \t]*([A-Za-z0-9_]+(?:[.-][A-Za-z0-9_]+)+)[ \t]*[\[({]")
    })
}

/// `ID[label]` with no double quote inside the brackets.
pub(crate) fn node_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r#"([A-Za-z0-9_]+)\[([^\]"\n]*)\]"#))
}

/// `ID[label]` with no quotes and no nested shape delimiters.
pub(crate) fn plain_node_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r#"([A-Za-z0-9_]+)\[([^\]\["\n(){}/\\]+)\]"#))
}

/// `['x']`, `('x')` or `{'x'}`.
pub(crate) fn single_quoted_node() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        compile(
            r#"\[[ \t]*'([^'"\n]*)'[ \t]*\]|\([ \t]*'([^'"\n]*)'[ \t]*\)|\{[ \t]*'([^'"\n]*)'[ \t]*\}"#,
        )
    })
}

/// `|'x'|`.
pub(crate) fn single_quoted_arrow() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r#"\|[ \t]*'([^'"|\n]*)'[ \t]*\|"#))
}

/// Three or more dashes or equals signs ending in an arrowhead.
pub(crate) fn overlong_head() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"(<?)(-{3,}|={3,})>"))
}

/// An arrowhead followed by three or more dashes or equals signs.
pub(crate) fn overlong_tail() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"<(-{3,}|={3,})"))
}

/// Underscore arrows: `__>`, `<__`, `__>>`, `<<__`, `_._>`, `<_._`.
pub(crate) fn underscore_arrow() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"<<_{2,}|_{2,}>>|<_\._|_\._>|<_{2,}|_{2,}>"))
}

/// A `classDef name props` line.
pub(crate) fn class_def() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"(?m)^[ \t]*classDef[ \t]+(\S+)[ \t]*([^\n\r]*)\r?$"))
}

/// A markdown fence marker with an optional language tag.
pub(crate) fn code_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"```[A-Za-z0-9_+-]*"))
}

/// Returns `true` if byte `pos` of `text` lies inside a double-quoted string
/// on its line.
pub(crate) fn inside_quotes(text: &str, pos: usize) -> bool {
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..pos].bytes().filter(|&b| b == b'"').count() % 2 == 1
}

/// Returns `true` if `pos` sits inside an unclosed `[`, `(` or `{` on its line.
pub(crate) fn inside_brackets(text: &str, pos: usize) -> bool {
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let mut depth = 0i32;
    let mut quoted = false;
    for b in text[line_start..pos].bytes() {
        match b {
            b'"' => quoted = !quoted,
            b'[' | b'(' | b'{' if !quoted => depth += 1,
            b']' | b')' | b'}' if !quoted => depth -= 1,
            _ => {}
        }
    }
    depth > 0
}

/// Replace every match of `re` that starts outside double quotes.
///
/// `rewrite` returns `None` to keep a match as-is.
pub(crate) fn replace_unquoted<F>(re: &Regex, text: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    re.replace_all(text, |caps: &Captures<'_>| {
        let (start, whole) = caps.get(0).map_or((0, ""), |m| (m.start(), m.as_str()));
        if inside_quotes(text, start) {
            return whole.to_string();
        }
        rewrite(caps).unwrap_or_else(|| whole.to_string())
    })
    .into_owned()
}

/// Iterate over matches of `re` that start outside double quotes.
pub(crate) fn unquoted_captures<'t>(
    re: &'static Regex,
    text: &'t str,
) -> impl Iterator<Item = Captures<'t>> + 't {
    re.captures_iter(text).filter(move |caps| {
        caps.get(0)
            .is_some_and(|m| !inside_quotes(text, m.start()))
    })
}

/// Text of capture group `index`, or `""` if it did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// The first line that carries diagram content.
///
/// Blank lines, fence markers and `%%` comments or directives are skipped.
pub fn first_content_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| {
        !line.is_empty() && !line.starts_with("```") && !line.starts_with("%%")
    })
}

/// The diagram keyword opening `text`, if its first content line has one.
pub fn diagram_keyword(text: &str) -> Option<&'static str> {
    let first_word = first_content_line(text)?
        .split(|c: char| c.is_whitespace() || c == ';')
        .next()?;
    DIAGRAM_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| *keyword == first_word)
}

/// Returns `true` unless the diagram declares a non-flowchart type.
pub(crate) fn is_flowchart_like(text: &str) -> bool {
    diagram_keyword(text).is_none_or(|k| matches!(k, "graph" | "flowchart" | "flowchart-elk"))
}

/// Returns `true` if the first content line asks for a flowchart header.
pub(crate) fn mentions_flowchart(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("graph") || lower.contains("flowchart")
}

/// Returns `true` if `label` contains a reserved character.
pub(crate) fn has_reserved_char(label: &str) -> bool {
    label.chars().any(|c| RESERVED_LABEL_CHARS.contains(c))
}

/// Returns `true` if `label` is wrapped in single quotes.
pub(crate) fn is_single_quoted(label: &str) -> bool {
    label.len() >= 2 && label.starts_with('\'') && label.ends_with('\'')
}

/// Returns `true` if a bracket label encodes a node shape rather than text.
pub(crate) fn is_shape_label(label: &str) -> bool {
    if label.starts_with('[') {
        return true;
    }
    let mut chars = label.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) => SHAPE_DELIMITERS.contains(&(open, close)),
        _ => false,
    }
}

/// Returns `true` if a bracketed node label must be wrapped in double quotes.
pub(crate) fn node_label_needs_quotes(label: &str) -> bool {
    let label = label.trim();
    !label.is_empty()
        && has_reserved_char(label)
        && !is_single_quoted(label)
        && !is_shape_label(label)
}

/// Returns `true` if an arrow label must be wrapped in double quotes.
pub(crate) fn arrow_label_needs_quotes(label: &str) -> bool {
    let label = label.trim();
    !label.is_empty() && has_reserved_char(label) && !is_single_quoted(label)
}

/// Byte offsets of single-dash `->` arrows outside double quotes.
pub(crate) fn single_dash_arrows(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    text.match_indices("->")
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            let before = pos.checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(pos + 2).copied();
            !matches!(before, Some(b'-' | b'.' | b'='))
                && !matches!(after, Some(b'-' | b'.' | b'>'))
                && !inside_quotes(text, pos)
                && !inside_brackets(text, pos)
        })
        .collect()
}
