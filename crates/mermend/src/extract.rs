//! Pulling diagram source and tagged sections out of model responses.
//!
//! Responses typically wrap the diagram in a markdown fence and precede it
//! with `<think>`, `<explanation>` or `<component_mapping>` sections. These
//! helpers isolate the parts a caller needs before handing the diagram to
//! the fixer.

use std::sync::OnceLock;

use regex::Regex;

fn fenced_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)```(?:mermaid)?[ \t\r]*\n(.*?)```").expect("regex must compile")
    })
}

fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(?:mermaid)?[ \t\r]*\n").expect("regex must compile"))
}

/// The trimmed content of the first fenced block in `response`.
///
/// A block opened with ```` ```mermaid ```` or a bare ```` ``` ```` counts.
/// If the response was cut off after an opening fence, everything after it
/// is returned. Returns `None` when there is no fence at all.
///
/// # Examples
///
/// ```
/// use mermend::extract::extract_diagram;
///
/// let response = "<think>plan</think>\n```mermaid\nflowchart TD\n    A --> B\n```";
/// assert_eq!(extract_diagram(response), Some("flowchart TD\n    A --> B"));
/// assert_eq!(extract_diagram("no diagram here"), None);
/// ```
pub fn extract_diagram(response: &str) -> Option<&str> {
    if let Some(caps) = fenced_block().captures(response) {
        return caps.get(1).map(|m| m.as_str().trim());
    }
    let open = opening_fence().find(response)?;
    Some(response[open.end()..].trim())
}

/// The trimmed text between `<tag>` and `</tag>`, if both are present.
///
/// ```
/// use mermend::extract::extract_tagged;
///
/// let response = "<component_mapping>\n1. API: src/api\n</component_mapping>";
/// assert_eq!(extract_tagged(response, "component_mapping"), Some("1. API: src/api"));
/// ```
pub fn extract_tagged<'a>(response: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = response.find(&open)? + open.len();
    let end = start + response[start..].find(&close)?;
    Some(response[start..end].trim())
}

/// Remove a leading fence line and a trailing fence marker from `text`.
///
/// Text without fences is returned trimmed.
pub fn strip_fences(text: &str) -> &str {
    let mut text = text.trim();
    if text.starts_with("```") {
        text = text.split_once('\n').map_or("", |(_, rest)| rest);
    }
    text.strip_suffix("```").unwrap_or(text).trim()
}
