//! External search providers — the only place the service talks to third-party APIs.
//!
//! Each provider is a trait so the analysis pipeline can be driven by mock
//! implementations in tests. `AppState` carries them as `Arc<dyn ...>`.
//! Every call is best-effort: callers receive a `ProviderError` and decide how
//! to fold it.

pub mod google;
pub mod jsearch;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::config::OutboundConfig;

pub use google::GoogleSearchClient;
pub use jsearch::JSearchClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// One job posting returned by the job-search provider. Only the description
/// feeds skill extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListing {
    #[serde(default)]
    pub job_description: Option<String>,
}

/// One web-search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub link: String,
}

#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    /// Returns the listings for `query`, in provider order. An empty vector
    /// means the provider answered but had nothing.
    async fn search_jobs(&self, query: &str) -> Result<Vec<JobListing>, ProviderError>;
}

#[async_trait]
pub trait ResourceSearchProvider: Send + Sync {
    /// Returns the web-search hits for `query`, in provider order.
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, ProviderError>;
}

/// Builds the shared HTTP client with the configured per-call timeout.
pub fn build_http_client(outbound: &OutboundConfig) -> anyhow::Result<Client> {
    Ok(Client::builder().timeout(outbound.timeout).build()?)
}

/// Sends a request, retrying 429/5xx responses and transport errors up to
/// `max_retries` extra times with exponential backoff (500ms, 1s, 2s, ...).
/// Any other non-2xx status is returned immediately.
pub(crate) async fn send_with_retry<F>(
    build: F,
    max_retries: u32,
) -> Result<Response, ProviderError>
where
    F: Fn() -> RequestBuilder,
{
    let mut last_error: Option<ProviderError> = None;

    for attempt in 0..=max_retries {
        if attempt > 0 {
            let delay = Duration::from_millis(500 * (1 << (attempt - 1).min(6)));
            warn!(
                "Provider call attempt {} failed, retrying after {}ms...",
                attempt,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }

        let response = match build().send().await {
            Ok(r) => r,
            Err(e) => {
                last_error = Some(ProviderError::Http(e));
                continue;
            }
        };

        let status = response.status();

        if status.as_u16() == 429 || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            warn!("Provider returned {}: {}", status, truncate(&body, 200));
            last_error = Some(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
            continue;
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        return Ok(response);
    }

    Err(last_error.unwrap_or(ProviderError::Api {
        status: 0,
        message: "no attempt was made".to_string(),
    }))
}

/// Reads the whole body and decodes it, so a bad payload surfaces as
/// `ProviderError::Parse` rather than a transport error.
pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ProviderError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
