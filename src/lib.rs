// src/lib.rs

//! opsearch-rs: workspace facade over `opsearch-core` and `opsearch-client`.
//!
//! This crate exists to host the runnable demos under `demos/` and to offer
//! a single-import prelude. Library users normally depend on the member
//! crates directly.

pub use opsearch_client;
pub use opsearch_core;

pub mod prelude {
    pub use opsearch_client::{
        ClientError, Debouncer, FetchError, HttpPointSource, PointSource, SearchConfig,
        SearchController, SearchHandle, DEFAULT_DEBOUNCE,
    };
    pub use opsearch_core::{
        cmp_points, filter_points, fold_key, is_main_ch_code, sort_points, OperationalPoint,
        SearchSession, SessionConfig, SessionSnapshot, MAIN_CH_CODES, NO_SELECTION,
    };
}
