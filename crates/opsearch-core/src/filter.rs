// crates/opsearch-core/src/filter.rs

//! Code filter for the displayed result view.
//!
//! The filtered view only populates once an explicit filter string exists:
//! `None` means nothing is shown, not everything. Each candidate is checked
//! against two independent rules and pushed once per rule it matches, so a
//! candidate satisfying both appears twice. The duplicate inclusion is a
//! quirk of the upstream client and is preserved deliberately.

use crate::model::{is_main_ch_code, OperationalPoint};
use crate::text::fold_key;

/// Narrows an already-sorted slice by the code filter.
///
/// Rules, evaluated per candidate in sequence:
/// 1. the filter and the candidate's `ch` are both main codes (the empty
///    string is a main code, so `Some("")` triggers this rule too);
/// 2. the folded `ch` contains the folded filter as a substring.
///
/// Output order follows input order.
pub fn filter_points(
    sorted: &[OperationalPoint],
    code_filter: Option<&str>,
) -> Vec<OperationalPoint> {
    let Some(filter) = code_filter else {
        return Vec::new();
    };
    let filter_is_main = is_main_ch_code(filter);
    let needle = fold_key(filter);

    let mut out = Vec::new();
    for point in sorted {
        if filter_is_main && is_main_ch_code(&point.ch) {
            out.push(point.clone());
        }
        if fold_key(&point.ch).contains(&needle) {
            out.push(point.clone());
        }
    }
    out
}
