// crates/opsearch-core/src/sort.rs

//! Ordering policy for lookup results.
//!
//! The order is two-tiered: points carrying a main classification code come
//! first, keeping their relative fetch order among themselves; every other
//! point follows, ordered by folded `ch` code. The name is only consulted
//! for the exact-equality tie, which compares equal; it never orders the
//! list. This mirrors the behavior of the upstream service's client and is
//! kept as-is on purpose.

use std::cmp::Ordering;

use crate::model::{is_main_ch_code, OperationalPoint};
use crate::text::fold_key;

/// Comparator behind [`sort_points`].
///
/// Main-coded points compare equal to each other so a stable sort leaves
/// them in fetch order; a main-coded point always precedes a non-main one.
pub fn cmp_points(a: &OperationalPoint, b: &OperationalPoint) -> Ordering {
    if a.name == b.name {
        return Ordering::Equal;
    }
    match (is_main_ch_code(&a.ch), is_main_ch_code(&b.ch)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => fold_key(&a.ch).cmp(&fold_key(&b.ch)),
    }
}

/// Stable in-place sort by [`cmp_points`].
pub fn sort_points(points: &mut [OperationalPoint]) {
    points.sort_by(cmp_points);
}
