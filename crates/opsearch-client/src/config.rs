// crates/opsearch-client/src/config.rs

use std::time::Duration;

/// Debounce applied to the query field unless overridden.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Tuning knobs for [`SearchController`].
///
/// [`SearchController`]: crate::controller::SearchController
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Trailing-edge debounce for the query field. The code filter is never
    /// debounced.
    pub debounce: Duration,
    /// Query to search for right away, as if it had already settled.
    pub initial_query: Option<String>,
    /// Code filter active from the first snapshot on.
    pub initial_code_filter: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            initial_query: None,
            initial_code_filter: None,
        }
    }
}
