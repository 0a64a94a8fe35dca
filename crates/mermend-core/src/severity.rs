//! Severity levels for findings.
//!
//! Issues make a diagram invalid; warnings are informational and never
//! affect validity.

use std::fmt;

use serde::Serialize;

/// The severity level of a [`Finding`](crate::Finding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A hard problem the renderer is expected to reject.
    Issue,

    /// A soft problem that usually still renders.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an issue severity.
    pub fn is_issue(&self) -> bool {
        matches!(self, Severity::Issue)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Issue => write!(f, "issue"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
