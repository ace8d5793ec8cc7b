// crates/opsearch-client/src/fetch.rs

//! The remote lookup capability and its HTTP implementation.

use std::future::Future;

use opsearch_core::OperationalPoint;

use crate::error::FetchError;

/// Remote lookup: one query in, a list of candidate points out.
///
/// The controller keeps the source behind an `Arc` and clones it into each
/// spawned request task, so implementations must be cheap to share.
pub trait PointSource: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<OperationalPoint>, FetchError>> + Send;
}

/// [`PointSource`] backed by the HTTP lookup endpoint.
///
/// Issues `GET {base}/search/?query=<q>` and expects a 2xx response whose
/// body is a JSON array of `{ch, ci, name}` objects. A malformed body
/// surfaces as [`FetchError::Http`] via the decoder.
#[derive(Debug, Clone)]
pub struct HttpPointSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPointSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`new`], reusing an existing client and its connection pool.
    ///
    /// [`new`]: HttpPointSource::new
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }
}

impl PointSource for HttpPointSource {
    async fn search(&self, query: &str) -> Result<Vec<OperationalPoint>, FetchError> {
        let response = self
            .client
            .get(format!("{}/search/", self.base_url))
            .query(&[("query", query)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json::<Vec<OperationalPoint>>().await?)
    }
}
