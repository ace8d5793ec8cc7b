// crates/opsearch-core/src/lib.rs

//! opsearch-core: the typeahead result pipeline for operational points.
//!
//! This crate holds the synchronous half of the search engine: the data
//! model, the ordering policy, the code filter and the per-component
//! [`SearchSession`] that ties them together. It performs no I/O; the
//! debounce timer and the lookup request live in `opsearch-client`.
//!
//! Derived state (`sorted_results`, `displayed_results`) is recomputed
//! atomically on every mutation, so a reader of a session never observes a
//! half-updated view.

pub mod filter;
pub mod model;
pub mod session;
pub mod sort;
pub mod text;

// Re-exports
pub use crate::filter::filter_points;
pub use crate::model::{is_main_ch_code, OperationalPoint, MAIN_CH_CODES};
pub use crate::session::{SearchSession, SessionConfig, SessionSnapshot, NO_SELECTION};
pub use crate::sort::{cmp_points, sort_points};
pub use crate::text::fold_key;
