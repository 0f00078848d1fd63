//! JSearch (RapidAPI) job-search client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::{JobSearchConfig, OutboundConfig};
use crate::providers::{decode_json, send_with_retry, JobListing, JobSearchProvider, ProviderError};

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    /// Absent when the provider has nothing for the query.
    #[serde(default)]
    data: Option<Vec<JobListing>>,
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    url: String,
    host: String,
    api_key: String,
    max_retries: u32,
}

impl JSearchClient {
    pub fn new(client: Client, config: &JobSearchConfig, outbound: &OutboundConfig) -> Self {
        Self {
            client,
            url: config.url.clone(),
            host: config.host.clone(),
            api_key: config.api_key.clone(),
            max_retries: outbound.max_retries,
        }
    }
}

#[async_trait]
impl JobSearchProvider for JSearchClient {
    async fn search_jobs(&self, query: &str) -> Result<Vec<JobListing>, ProviderError> {
        let response = send_with_retry(
            || {
                self.client
                    .get(&self.url)
                    .query(&[("query", query), ("num_pages", "1")])
                    .header("X-RapidAPI-Key", &self.api_key)
                    .header("X-RapidAPI-Host", &self.host)
            },
            self.max_retries,
        )
        .await?;

        let body: JSearchResponse = decode_json(response).await?;
        let listings = body.data.unwrap_or_default();
        debug!("Job search for '{query}' returned {} listings", listings.len());
        Ok(listings)
    }
}
