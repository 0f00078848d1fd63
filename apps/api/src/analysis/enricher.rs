//! Resource Enricher: attaches a learning-resource link to each missing skill.
//!
//! Lookups for one request run concurrently but are admitted through the
//! shared [`AdmissionGate`], so the third-party quota sees at most
//! `gate.capacity()` calls at once across the whole process. A lookup that
//! fails, times out, or finds nothing yields `url: None`; it never fails the
//! batch.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::analysis::gate::AdmissionGate;
use crate::analysis::models::EnrichedSkill;
use crate::providers::{ProviderError, ResourceSearchProvider};

pub fn learning_query(skill: &str) -> String {
    format!("{skill} tutorial for beginners")
}

pub struct ResourceEnricher {
    provider: Arc<dyn ResourceSearchProvider>,
    gate: AdmissionGate,
    timeout: Duration,
}

impl ResourceEnricher {
    pub fn new(
        provider: Arc<dyn ResourceSearchProvider>,
        gate: AdmissionGate,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            gate,
            timeout,
        }
    }

    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }

    /// Looks up every skill and returns them in input order once all lookups
    /// have finished.
    pub async fn enrich(&self, missing: &[String]) -> Vec<EnrichedSkill> {
        if missing.is_empty() {
            return Vec::new();
        }

        info!(
            "Rate-limiting the search for {} missing skills (capacity {})",
            missing.len(),
            self.gate.capacity()
        );

        join_all(missing.iter().map(|skill| async move {
            EnrichedSkill {
                skill: skill.clone(),
                url: self.find_resource(skill).await,
            }
        }))
        .await
    }

    async fn find_resource(&self, skill: &str) -> Option<String> {
        let query = learning_query(skill);

        // The permit lives only for this block: the slot is free again before
        // anything below is logged.
        let outcome = {
            let _permit = match self.gate.acquire().await {
                Ok(permit) => permit,
                Err(e) => {
                    warn!("Skipping resource lookup for {skill}: {e}");
                    return None;
                }
            };
            match tokio::time::timeout(self.timeout, self.provider.search(&query)).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(self.timeout)),
            }
        };

        match outcome {
            Ok(items) => {
                let url = items.into_iter().next().map(|item| item.link);
                if url.is_none() {
                    debug!("No learning resource found for {skill}");
                }
                url
            }
            Err(e) => {
                warn!("Error fetching resource for {skill}: {e}");
                None
            }
        }
    }
}
