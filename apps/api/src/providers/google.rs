//! Google Custom Search client used to find learning resources.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{OutboundConfig, WebSearchConfig};
use crate::providers::{decode_json, send_with_retry, ProviderError, ResourceSearchProvider, SearchItem};

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    /// Google omits `items` entirely when there are no results.
    #[serde(default)]
    items: Option<Vec<SearchItem>>,
}

#[derive(Clone)]
pub struct GoogleSearchClient {
    client: Client,
    url: String,
    api_key: String,
    search_engine_id: String,
    max_retries: u32,
}

impl GoogleSearchClient {
    pub fn new(client: Client, config: &WebSearchConfig, outbound: &OutboundConfig) -> Self {
        Self {
            client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
            search_engine_id: config.search_engine_id.clone(),
            max_retries: outbound.max_retries,
        }
    }
}

#[async_trait]
impl ResourceSearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, ProviderError> {
        let response = send_with_retry(
            || {
                self.client.get(&self.url).query(&[
                    ("key", self.api_key.as_str()),
                    ("cx", self.search_engine_id.as_str()),
                    ("q", query),
                ])
            },
            self.max_retries,
        )
        .await?;

        let body: CustomSearchResponse = decode_json(response).await?;
        Ok(body.items.unwrap_or_default())
    }
}
