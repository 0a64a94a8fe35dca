//! A single reporter result.
//!
//! A [`Finding`] is the reporter's counterpart of a compiler diagnostic:
//! a severity, a rule code, a message, the first offending span and an
//! optional hint describing the automatic repair.

use std::fmt;

use serde::Serialize;

use crate::{RuleCode, Severity, Span};

/// One problem found in a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    severity: Severity,
    code: RuleCode,
    message: String,
    #[serde(skip)]
    span: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl Finding {
    /// Create an issue finding.
    pub fn issue(code: RuleCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Issue, code, message)
    }

    /// Create a warning finding.
    pub fn warning(code: RuleCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Get the severity of this finding.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the rule code.
    pub fn code(&self) -> RuleCode {
        self.code
    }

    /// Get the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the span of the first offending match, if known.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Attach the span of the first offending match.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, code: RuleCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            span: None,
            help: None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "issue[M004]: message"
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}
