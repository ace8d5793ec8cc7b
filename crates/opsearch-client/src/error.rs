// crates/opsearch-client/src/error.rs

use thiserror::Error;

/// Errors surfaced by [`SearchHandle`] mutators.
///
/// [`SearchHandle`]: crate::controller::SearchHandle
#[derive(Debug, Error)]
pub enum ClientError {
    /// The controller task has stopped; this handle is no longer usable.
    #[error("search controller is closed")]
    Closed,
}

/// Failure modes of a single lookup request.
///
/// These never cross the component boundary; the controller logs them at
/// debug level and degrades to an empty result set.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup service answered {0}")]
    Status(reqwest::StatusCode),
}
