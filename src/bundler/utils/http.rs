//! HTTP utilities for downloading prebuilt packages.
//!
//! The [`Fetcher`] trait is the seam between the bundler and the network;
//! [`HttpFetcher`] is the reqwest-backed implementation.

use crate::bundler::error::{Error, Result};
use bytes::Bytes;
use std::future::Future;

/// Downloads the body of a URL.
pub trait Fetcher {
    /// Fetches `url` and returns the full response body.
    ///
    /// Transport errors and non-success HTTP statuses are
    /// [`Error::DownloadFailed`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Bytes>> + Send;
}

/// Fetcher backed by a shared [`reqwest::Client`].
///
/// No request timeout is configured.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a default client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        log::info!("Downloading {}", url);

        let failed = |reason: String| Error::DownloadFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?
            .error_for_status()
            .map_err(|e| failed(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| failed(format!("Failed to read response: {}", e)))?;

        log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}
