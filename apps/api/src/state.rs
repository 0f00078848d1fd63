use std::sync::Arc;

use crate::analysis::enricher::ResourceEnricher;
use crate::config::JobSearchFailurePolicy;
use crate::providers::JobSearchProvider;
use crate::vocabulary::Vocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub vocabulary: Arc<Vocabulary>,
    pub job_search: Arc<dyn JobSearchProvider>,
    /// Owns the process-wide admission gate for web-search lookups.
    pub enricher: Arc<ResourceEnricher>,
    pub job_search_failure_policy: JobSearchFailurePolicy,
}
