// crates/opsearch-core/src/model.rs

use serde::{Deserialize, Serialize};

/// A named, geographically coded location returned by the lookup service.
///
/// `ch` is the secondary classification code and may be the empty string.
/// `ci` is a numeric identifier carried for display only; it never
/// participates in sorting or filtering.
///
/// Field names match the wire format (`{"ch": ..., "ci": ..., "name": ...}`),
/// so the struct deserializes straight from the endpoint payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalPoint {
    pub name: String,
    pub ch: String,
    pub ci: u64,
}

/// The "main" classification codes.
///
/// Points carrying one of these codes rank above every other point,
/// regardless of how their names or codes would compare alphabetically.
pub const MAIN_CH_CODES: [&str; 3] = ["", "00", "BV"];

/// Exact-match membership test against [`MAIN_CH_CODES`].
///
/// Deliberately not folded: `"bv"` is not a main code, `"BV"` is.
pub fn is_main_ch_code(ch: &str) -> bool {
    MAIN_CH_CODES.contains(&ch)
}
