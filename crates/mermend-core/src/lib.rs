//! Mermend Core Types
//!
//! This crate provides the vocabulary shared by the mermend fixer, the
//! reporter and the command-line front end:
//!
//! - **Spans**: byte ranges into diagram source ([`Span`])
//! - **Rules**: stable codes for every repair and check ([`RuleCode`])
//! - **Findings**: individual reporter results ([`Finding`], [`Severity`])
//! - **Fix records**: what a fixer pass changed ([`FixRecord`])
//! - **Reports**: the read-only validity summary ([`ValidationReport`])

mod finding;
mod fix_record;
mod report;
mod rule_code;
mod severity;
mod span;

pub use finding::Finding;
pub use fix_record::{FixEntry, FixKind, FixRecord};
pub use report::ValidationReport;
pub use rule_code::RuleCode;
pub use severity::Severity;
pub use span::Span;
