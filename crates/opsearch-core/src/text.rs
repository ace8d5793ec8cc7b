// crates/opsearch-core/src/text.rs

//! Text folding for comparisons and substring matching.

use deunicode::deunicode;

/// Folds a string for matching: trimmed, transliterated to ASCII and
/// lowercased.
///
/// Used for the ordering fallback on classification codes and for the
/// filter's substring rule, giving accent- and case-insensitive behavior
/// without pulling in a full collation stack.
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_lowercase()
}
