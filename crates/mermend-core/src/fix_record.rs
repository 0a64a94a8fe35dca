//! The record of what a fixer pass changed.
//!
//! A [`FixRecord`] lists entries in pipeline order. Entries are either
//! applied fixes or diagnostic warnings; warnings never correspond to a
//! text change.

use std::fmt;

use serde::Serialize;

use crate::RuleCode;

/// Whether an entry describes a rewrite or a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixKind {
    /// The rule rewrote the text.
    Fix,

    /// The rule only reports; the text is unchanged.
    Warning,
}

/// A single line of a [`FixRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixEntry {
    code: RuleCode,
    kind: FixKind,
    message: String,
}

impl FixEntry {
    /// Get the rule code that produced this entry.
    pub fn code(&self) -> RuleCode {
        self.code
    }

    /// Get the entry kind.
    pub fn kind(&self) -> FixKind {
        self.kind
    }

    /// Get the raw message, without any `Warning:` prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FixEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FixKind::Fix => write!(f, "{}", self.message),
            FixKind::Warning => write!(f, "Warning: {}", self.message),
        }
    }
}

/// Ordered entries describing which rules fired during one fixer pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FixRecord {
    entries: Vec<FixEntry>,
}

impl FixRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied fix.
    pub fn fixed(&mut self, code: RuleCode, message: impl Into<String>) {
        self.push(code, FixKind::Fix, message);
    }

    /// Record a diagnostic warning.
    pub fn warn(&mut self, code: RuleCode, message: impl Into<String>) {
        self.push(code, FixKind::Warning, message);
    }

    /// Get all entries in pipeline order.
    pub fn entries(&self) -> &[FixEntry] {
        &self.entries
    }

    /// Iterate over entries describing actual rewrites.
    pub fn fixes(&self) -> impl Iterator<Item = &FixEntry> {
        self.entries.iter().filter(|e| e.kind == FixKind::Fix)
    }

    /// Iterate over diagnostic warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &FixEntry> {
        self.entries.iter().filter(|e| e.kind == FixKind::Warning)
    }

    /// Returns `true` if any rule rewrote the text.
    pub fn has_fixes(&self) -> bool {
        self.fixes().next().is_some()
    }

    /// Returns `true` if an entry with the given code exists.
    pub fn contains(&self, code: RuleCode) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Number of entries, fixes and warnings alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every entry as a human-readable line.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, code: RuleCode, kind: FixKind, message: impl Into<String>) {
        self.entries.push(FixEntry {
            code,
            kind,
            message: message.into(),
        });
    }
}

impl From<FixRecord> for Vec<String> {
    fn from(record: FixRecord) -> Self {
        record.messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_record_new_is_empty() {
        let record = FixRecord::new();
        assert!(record.is_empty());
        assert!(!record.has_fixes());
        assert!(record.messages().is_empty());
    }

    #[test]
    fn test_fix_record_keeps_order_and_kinds() {
        let mut record = FixRecord::new();
        record.fixed(RuleCode::M001, "Fixed arrow label spacing");
        record.warn(RuleCode::M008, "classDef 'x' may be missing fill/stroke properties");
        record.fixed(RuleCode::M010, "Removed markdown code fences");

        assert_eq!(record.len(), 3);
        assert!(record.has_fixes());
        assert_eq!(record.fixes().count(), 2);
        assert_eq!(record.warnings().count(), 1);
        assert!(record.contains(RuleCode::M008));
        assert!(!record.contains(RuleCode::M003));
        assert_eq!(
            record.messages(),
            vec![
                "Fixed arrow label spacing".to_string(),
                "Warning: classDef 'x' may be missing fill/stroke properties".to_string(),
                "Removed markdown code fences".to_string(),
            ]
        );
    }

    #[test]
    fn test_fix_record_warnings_only_has_no_fixes() {
        let mut record = FixRecord::new();
        record.warn(RuleCode::M100, "Empty diagram provided");

        assert!(!record.is_empty());
        assert!(!record.has_fixes());
        assert_eq!(record.entries()[0].message(), "Empty diagram provided");
        assert_eq!(record.entries()[0].kind(), FixKind::Warning);
    }

    #[test]
    fn test_fix_record_into_strings() {
        let mut record = FixRecord::new();
        record.fixed(RuleCode::M007, "Fixed arrow syntax (---> to -->)");
        let lines: Vec<String> = record.into();
        assert_eq!(lines, vec!["Fixed arrow syntax (---> to -->)".to_string()]);
    }
}
