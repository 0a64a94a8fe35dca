//! The fixer: runs the repair pipeline over diagram text.

use log::{debug, trace};

use mermend_core::{FixRecord, RuleCode};

use crate::{config::FixerConfig, rules::PIPELINE};

/// Corrected diagram text and the record of what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    text: String,
    record: FixRecord,
}

impl Fixed {
    /// The corrected text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The record of rules that fired.
    pub fn record(&self) -> &FixRecord {
        &self.record
    }

    /// Returns `true` if any rule rewrote the text.
    pub fn changed(&self) -> bool {
        self.record.has_fixes()
    }

    /// The input unchanged, with an empty record.
    pub(crate) fn passthrough(text: &str) -> Self {
        Self {
            text: text.to_string(),
            record: FixRecord::new(),
        }
    }

    /// Split into corrected text and record.
    pub fn into_parts(self) -> (String, FixRecord) {
        (self.text, self.record)
    }
}

/// Applies the repair pipeline with a given configuration.
///
/// The fixer is stateless between calls and can be shared across threads.
///
/// # Examples
///
/// ```
/// use mermend::{Fixer, config::FixerConfig};
///
/// let fixer = Fixer::new(FixerConfig::default());
/// let fixed = fixer.fix("A -->| \"calls\" | B");
///
/// assert_eq!(fixed.text(), "A -->|\"calls\"| B");
/// assert!(fixed.changed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fixer {
    config: FixerConfig,
}

impl Fixer {
    /// Create a new fixer with the given configuration.
    pub fn new(config: FixerConfig) -> Self {
        Self { config }
    }

    /// Run every rule in order over `diagram`.
    ///
    /// Empty or whitespace-only input is returned unchanged with a single
    /// warning entry. Applying the fixer to its own output changes nothing
    /// and records no fixes.
    pub fn fix(&self, diagram: &str) -> Fixed {
        let mut record = FixRecord::new();

        if diagram.trim().is_empty() {
            record.warn(RuleCode::M100, "Empty diagram provided");
            return Fixed {
                text: diagram.to_string(),
                record,
            };
        }

        let mut text = diagram.to_string();
        for rule in PIPELINE {
            let before = record.len();
            text = rule.apply(&text, &self.config, &mut record);
            if record.len() > before {
                trace!(rule = rule.name(), code = rule.code().as_str(); "Rule fired");
            }
        }

        debug!(
            fixes = record.fixes().count(),
            warnings = record.warnings().count();
            "Diagram fixed"
        );

        Fixed { text, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_empty_input() {
        let fixer = Fixer::default();
        for input in ["", "   \n\t\n"] {
            let fixed = fixer.fix(input);
            assert_eq!(fixed.text(), input);
            assert_eq!(fixed.record().len(), 1);
            assert!(!fixed.changed());
            assert!(fixed.record().messages()[0].to_lowercase().contains("empty"));
        }
    }

    #[test]
    fn test_fix_valid_input_untouched() {
        let input = "flowchart TD\nA[\"Node A\"] -->|\"calls\"| B[\"Node B\"]";
        let fixed = Fixer::default().fix(input);
        assert_eq!(fixed.text(), input);
        assert!(fixed.record().is_empty());
    }

    #[test]
    fn test_passthrough_is_unchanged() {
        let fixed = Fixed::passthrough("A -->| x | B");
        assert_eq!(fixed.text(), "A -->| x | B");
        assert!(fixed.record().is_empty());
    }

    #[test]
    fn test_into_parts() {
        let (text, record) = Fixer::default().fix("A ---> B").into_parts();
        assert_eq!(text, "A --> B");
        assert!(record.has_fixes());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Lines of the kind model-generated flowcharts contain, broken and not.
    const FRAGMENTS: &[&str] = &[
        "flowchart TD",
        "graph LR",
        "    A[/api/endpoint]",
        "    B[Process (Backend)]",
        "    A -->| \"calls\" | B",
        "    API-Gateway[API Gateway]",
        "    API-Gateway --> Backend",
        "    user.service[\"User Service\"]",
        "    A ---> B",
        "    C <--- D",
        "    E __> F",
        "    G -> H",
        "    subgraph \"Layer\":::layer",
        "    subgraph api \"API\"",
        "    end",
        "    X['single']",
        "    A -->|calls func()| B",
        "```mermaid",
        "```",
        "    classDef bad color:#fff",
        "",
        "    N[Plain Node]",
        "    click A \"src/a.js\"",
    ];

    fn diagram_strategy() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(prop::sample::select(FRAGMENTS), 0..12),
            prop::sample::select(&["\n", "\r\n"][..]),
        )
            .prop_map(|(lines, newline)| lines.join(newline))
    }

    /// A label with exactly one reserved character and no brackets or quotes.
    fn reserved_label_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,5}[/(){}:;,.!?@#$%^&*+=<>|-][A-Za-z ]{0,5}"
    }

    // ===================
    // Property Test Functions
    // ===================

    /// A second pass over fixed output changes nothing.
    fn check_fix_is_idempotent(diagram: &str) -> Result<(), TestCaseError> {
        let fixer = Fixer::default();
        let first = fixer.fix(diagram);
        let second = fixer.fix(first.text());

        prop_assert_eq!(second.text(), first.text());
        prop_assert!(
            !second.changed(),
            "second pass recorded fixes: {:?}",
            second.record().messages()
        );
        Ok(())
    }

    /// Reserved labels end up wrapped in exactly one pair of double quotes.
    fn check_reserved_label_quoted(label: &str) -> Result<(), TestCaseError> {
        let fixed = Fixer::default().fix(&format!("flowchart TD\nN[{label}]"));
        let expected = format!("flowchart TD\nN[\"{}\"]", label.trim());

        prop_assert_eq!(fixed.text(), expected.as_str());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn fix_is_idempotent(diagram in diagram_strategy()) {
            check_fix_is_idempotent(&diagram)?;
        }

        #[test]
        fn reserved_labels_are_quoted_once(label in reserved_label_strategy()) {
            check_reserved_label_quoted(&label)?;
        }

        #[test]
        fn fix_never_panics(text in "\\PC{0,200}") {
            let _ = Fixer::default().fix(&text);
        }
    }
}
