//! Rule codes for the mermend fixer and reporter.
//!
//! Codes are organized by origin:
//! - `M0xx` - Pipeline rules, numbered in execution order
//! - `M1xx` - Reporter-only checks

use std::fmt;

use serde::Serialize;

/// Codes identifying every repair rule and every report check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RuleCode {
    // =========================================================================
    // Pipeline Rules (M0xx)
    // =========================================================================
    /// Arrow label spacing.
    ///
    /// Whitespace between an arrow and its label pipes, or inside the pipes,
    /// e.g. `-->| "text" |`.
    M001,

    /// Subgraph class styling.
    ///
    /// A `subgraph` declaration carrying a `:::class` suffix.
    M002,

    /// Identifier characters.
    ///
    /// A node identifier containing a dash or a dot.
    M003,

    /// Unquoted node label.
    ///
    /// A bracketed node label holding reserved characters without quotes.
    M004,

    /// Unquoted arrow label.
    ///
    /// An edge label between pipes holding reserved characters without quotes.
    M005,

    /// Diagram type declaration.
    ///
    /// The first line does not declare a diagram type.
    M006,

    /// Malformed arrow glyph.
    ///
    /// Overlong (`--->`), underscore (`__>`) or single-dash (`->`) arrows.
    M007,

    /// Incomplete classDef.
    ///
    /// A style class without both `fill:` and `stroke:` properties.
    M008,

    /// Single-quoted label.
    ///
    /// Labels only accept double quotes.
    M009,

    /// Markdown code fence.
    ///
    /// A triple-backtick fence marker left in the diagram.
    M010,

    /// Subgraph identifier prefix.
    ///
    /// A `subgraph` declaration with both an identifier and a label.
    M011,

    /// Plain bracketed label.
    ///
    /// A bracketed node label without quotes, quoted as a best effort.
    M012,

    /// Whitespace normalization.
    ///
    /// Indentation, trailing whitespace and blank lines.
    M013,

    // =========================================================================
    // Reporter Checks (M1xx)
    // =========================================================================
    /// Empty diagram.
    ///
    /// The input is empty or whitespace only.
    M100,

    /// Arrow/pipe gap.
    ///
    /// Whitespace between an arrow glyph and the first pipe of its label.
    M101,
}

impl RuleCode {
    /// Returns the code as a string (e.g., "M001").
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::M001 => "M001",
            RuleCode::M002 => "M002",
            RuleCode::M003 => "M003",
            RuleCode::M004 => "M004",
            RuleCode::M005 => "M005",
            RuleCode::M006 => "M006",
            RuleCode::M007 => "M007",
            RuleCode::M008 => "M008",
            RuleCode::M009 => "M009",
            RuleCode::M010 => "M010",
            RuleCode::M011 => "M011",
            RuleCode::M012 => "M012",
            RuleCode::M013 => "M013",
            RuleCode::M100 => "M100",
            RuleCode::M101 => "M101",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            RuleCode::M001 => "arrow label spacing",
            RuleCode::M002 => "subgraph class styling",
            RuleCode::M003 => "identifier characters",
            RuleCode::M004 => "unquoted node label",
            RuleCode::M005 => "unquoted arrow label",
            RuleCode::M006 => "diagram type declaration",
            RuleCode::M007 => "malformed arrow glyph",
            RuleCode::M008 => "incomplete classDef",
            RuleCode::M009 => "single-quoted label",
            RuleCode::M010 => "markdown code fence",
            RuleCode::M011 => "subgraph identifier prefix",
            RuleCode::M012 => "plain bracketed label",
            RuleCode::M013 => "whitespace normalization",
            RuleCode::M100 => "empty diagram",
            RuleCode::M101 => "arrow/pipe gap",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
