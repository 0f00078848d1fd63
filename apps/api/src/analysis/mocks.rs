//! Scriptable provider doubles shared by the analysis and route tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::providers::{
    JobListing, JobSearchProvider, ProviderError, ResourceSearchProvider, SearchItem,
};

/// Job search that returns fixed listings, or fails every call.
pub struct MockJobSearch {
    listings: Vec<JobListing>,
    fail: bool,
    pub queries: Mutex<Vec<String>>,
}

impl MockJobSearch {
    pub fn with_descriptions(descriptions: &[&str]) -> Self {
        Self {
            listings: descriptions
                .iter()
                .map(|d| JobListing {
                    job_description: Some(d.to_string()),
                })
                .collect(),
            fail: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_listings(listings: Vec<JobListing>) -> Self {
        Self {
            listings,
            fail: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            listings: Vec::new(),
            fail: true,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl JobSearchProvider for MockJobSearch {
    async fn search_jobs(&self, query: &str) -> Result<Vec<JobListing>, ProviderError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(ProviderError::Api {
                status: 503,
                message: "job search unavailable".to_string(),
            });
        }
        Ok(self.listings.clone())
    }
}

#[derive(Clone)]
pub enum SearchReply {
    Links(Vec<&'static str>),
    Fail,
}

/// Web search with per-query scripted replies, an injected delay, and
/// in-flight call tracking.
pub struct MockResourceSearch {
    replies: HashMap<String, SearchReply>,
    default_reply: SearchReply,
    delay: Duration,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub calls: Mutex<Vec<String>>,
}

impl MockResourceSearch {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            default_reply: SearchReply::Links(Vec::new()),
            delay: Duration::ZERO,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every query answers with a link derived from the query itself.
    pub fn echoing() -> Self {
        Self {
            default_reply: SearchReply::Links(vec!["echo"]),
            ..Self::new()
        }
    }

    pub fn reply(mut self, query: &str, reply: SearchReply) -> Self {
        self.replies.insert(query.to_string(), reply);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn peak(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceSearchProvider for MockResourceSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, ProviderError> {
        self.calls.lock().unwrap().push(query.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let reply = self
            .replies
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.default_reply.clone());
        match reply {
            SearchReply::Links(links) => Ok(links
                .into_iter()
                .map(|link| SearchItem {
                    link: if link == "echo" {
                        format!("https://learn.test/{}", query.replace(' ', "-"))
                    } else {
                        link.to_string()
                    },
                })
                .collect()),
            SearchReply::Fail => Err(ProviderError::Api {
                status: 500,
                message: "search backend error".to_string(),
            }),
        }
    }
}
