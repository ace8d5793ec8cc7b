// crates/opsearch-core/src/session.rs

//! Per-component search state.
//!
//! A [`SearchSession`] owns the raw input strings and the last fetched
//! result set, and keeps the two derived views in lockstep with them.
//! Mutators are plain synchronous calls; every one of them leaves the
//! session fully rederived before returning.

use crate::filter::filter_points;
use crate::model::OperationalPoint;
use crate::sort::sort_points;

/// Sentinel index meaning "no row selected".
pub const NO_SELECTION: isize = -1;

/// Initial values for a [`SearchSession`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub initial_query: Option<String>,
    pub initial_code_filter: Option<String>,
}

/// Point-in-time view of a session, cheap to clone and hand across task
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub query: String,
    pub code_filter: Option<String>,
    pub sorted_results: Vec<OperationalPoint>,
    pub displayed_results: Vec<OperationalPoint>,
    pub selected: isize,
}

/// Mutable typeahead state for one component instance.
///
/// Invariants:
/// - `sorted_results` and `displayed_results` are pure functions of
///   (`raw_results`, `code_filter`); input handlers never set them directly.
/// - an empty `raw_results` forces `code_filter` back to `None`: a filter
///   with nothing to filter must not persist.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    code_filter: Option<String>,
    raw_results: Vec<OperationalPoint>,
    sorted_results: Vec<OperationalPoint>,
    displayed_results: Vec<OperationalPoint>,
    selected: isize,
}

impl SearchSession {
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            query: config.initial_query.unwrap_or_default(),
            code_filter: config.initial_code_filter,
            raw_results: Vec::new(),
            sorted_results: Vec::new(),
            displayed_results: Vec::new(),
            selected: NO_SELECTION,
        };
        session.rederive();
        session
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn code_filter(&self) -> Option<&str> {
        self.code_filter.as_deref()
    }

    pub fn raw_results(&self) -> &[OperationalPoint] {
        &self.raw_results
    }

    pub fn sorted_results(&self) -> &[OperationalPoint] {
        &self.sorted_results
    }

    pub fn displayed_results(&self) -> &[OperationalPoint] {
        &self.displayed_results
    }

    pub fn selected(&self) -> isize {
        self.selected
    }

    /// Any edit of the query text drops the current selection. Results are
    /// untouched here; they only change once the debounced fetch resolves.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = NO_SELECTION;
    }

    /// The code filter reacts immediately; it narrows already-fetched data
    /// and never triggers network I/O.
    pub fn set_code_filter(&mut self, code_filter: Option<String>) {
        self.code_filter = code_filter;
        self.rederive();
    }

    /// Wholesale replacement of the raw results, as received from the
    /// lookup service. An empty result set also clears the code filter.
    pub fn apply_results(&mut self, results: Vec<OperationalPoint>) {
        self.raw_results = results;
        if self.raw_results.is_empty() {
            self.code_filter = None;
        }
        self.rederive();
    }

    /// Equivalent to applying an empty result set.
    pub fn clear_results(&mut self) {
        self.apply_results(Vec::new());
    }

    /// Marks the displayed row at `index` as selected.
    ///
    /// The index is not validated against `displayed_results`; it can go
    /// stale after a filter change.
    pub fn select(&mut self, index: usize) {
        self.selected = index as isize;
    }

    pub fn clear_selection(&mut self) {
        self.selected = NO_SELECTION;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            query: self.query.clone(),
            code_filter: self.code_filter.clone(),
            sorted_results: self.sorted_results.clone(),
            displayed_results: self.displayed_results.clone(),
            selected: self.selected,
        }
    }

    fn rederive(&mut self) {
        let mut sorted = self.raw_results.clone();
        sort_points(&mut sorted);
        self.displayed_results = filter_points(&sorted, self.code_filter.as_deref());
        self.sorted_results = sorted;
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
