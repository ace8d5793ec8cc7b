// crates/opsearch-client/src/lib.rs

//! opsearch-client: asynchronous driver for the opsearch-core pipeline.
//!
//! Wires raw keystrokes to the lookup service: query edits are
//! trailing-edge debounced (150 ms by default), a committed non-empty query
//! fires exactly one request, and responses replace the session's raw
//! results wholesale. The code filter bypasses the debounce entirely since
//! it only narrows data that is already local.
//!
//! Everything runs on one controller task; callers interact through a
//! cloneable [`SearchHandle`] and observe state as [`SessionSnapshot`]s on
//! a watch channel.
//!
//! Failure policy: a lookup that errors (transport, non-2xx, bad payload)
//! degrades to an empty result set. No error value ever crosses the
//! component boundary.
//!
//! [`SessionSnapshot`]: opsearch_core::SessionSnapshot

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod fetch;

// Re-exports
pub use crate::config::{SearchConfig, DEFAULT_DEBOUNCE};
pub use crate::controller::{SearchController, SearchHandle};
pub use crate::debounce::Debouncer;
pub use crate::error::{ClientError, FetchError};
pub use crate::fetch::{HttpPointSource, PointSource};
