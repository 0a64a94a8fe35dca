//! Node identifier rewriting.
//!
//! Identifiers declared with a dash or a dot (`api-gateway[...]`,
//! `user.service(...)`) are renamed and every whole-token reference outside
//! double quotes follows the new name.

use indexmap::IndexSet;
use log::trace;

use mermend_core::{FixRecord, RuleCode};

use crate::{config::FixerConfig, patterns};

/// Rename dash- and dot-bearing identifiers everywhere they are referenced.
pub(super) fn rewrite(text: &str, _config: &FixerConfig, record: &mut FixRecord) -> String {
    let declared = declared_identifiers(text);
    if declared.is_empty() {
        return text.to_string();
    }

    let mut fixed = text.to_string();
    let mut renamed = Vec::new();
    for old in &declared {
        let new = rename(old, &fixed);
        let replaced = replace_token(&fixed, old, &new);
        if replaced != fixed {
            trace!(old = old.as_str(), new = new.as_str(); "Renamed identifier");
            renamed.push(old.as_str());
            fixed = replaced;
        }
    }

    if !renamed.is_empty() {
        record.fixed(
            RuleCode::M003,
            format!(
                "Fixed node IDs with special characters: {}",
                renamed.join(", ")
            ),
        );
    }
    fixed
}

/// Dash- or dot-bearing identifiers declared at line start, first-seen order.
pub(crate) fn declared_identifiers(text: &str) -> IndexSet<String> {
    patterns::dotted_identifier()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The replacement name for `old`.
///
/// Dots become underscores. A dash between two multi-character segments
/// whose right side starts uppercase is dropped (`API-Gateway` becomes
/// `APIGateway`); any other dash becomes an underscore. If the joined name
/// already names something in `text`, the all-underscore name is used. A
/// name still taken after that gets the first free `_2`, `_3`, ... suffix.
pub(crate) fn rename(old: &str, text: &str) -> String {
    let underscored = old.replace(['-', '.'], "_");

    let segments: Vec<&str> = old.split(['-', '.']).collect();
    let separators: Vec<char> = old.chars().filter(|c| matches!(c, '-' | '.')).collect();
    let mut joined = String::with_capacity(old.len());
    for (i, segment) in segments.iter().enumerate() {
        joined.push_str(segment);
        let (Some(&separator), Some(next)) = (separators.get(i), segments.get(i + 1)) else {
            continue;
        };
        let drop_dash = separator == '-'
            && segment.len() >= 2
            && next.len() >= 2
            && next.starts_with(|c: char| c.is_ascii_uppercase());
        if !drop_dash {
            joined.push('_');
        }
    }

    let taken = |name: &str| !token_positions(text, name).is_empty();
    let base = if joined != underscored && taken(&joined) {
        underscored
    } else {
        joined
    };
    if !taken(&base) {
        return base;
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{base}_{suffix}");
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Replace whole-token occurrences of `old` outside double quotes.
fn replace_token(text: &str, old: &str, new: &str) -> String {
    let positions = token_positions(text, old);
    if positions.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for pos in positions {
        out.push_str(&text[last..pos]);
        out.push_str(new);
        last = pos + old.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Byte offsets where `token` occurs as a whole identifier outside quotes.
fn token_positions(text: &str, token: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    text.match_indices(token)
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            !extends_backward(bytes, pos)
                && !extends_forward(bytes, pos + token.len())
                && !patterns::inside_quotes(text, pos)
        })
        .collect()
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns `true` if the identifier ending at `start` continues further left.
fn extends_backward(bytes: &[u8], start: usize) -> bool {
    match start.checked_sub(1).map(|i| bytes[i]) {
        Some(b) if is_ident_byte(b) => true,
        Some(b'-' | b'.') => start >= 2 && is_ident_byte(bytes[start - 2]),
        _ => false,
    }
}

/// Returns `true` if the identifier ending at `end` continues further right.
fn extends_forward(bytes: &[u8], end: usize) -> bool {
    match bytes.get(end) {
        Some(&b) if is_ident_byte(b) => true,
        Some(b'-' | b'.') => bytes.get(end + 1).is_some_and(|&b| is_ident_byte(b)),
        _ => false,
    }
}
