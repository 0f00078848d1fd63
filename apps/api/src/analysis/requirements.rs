//! Requirement Extractor — required skills for a role, read off the first live
//! job listing the job-search provider returns.
//!
//! Matching is plain substring containment on the lowercased description.
//! Listing text is already role-focused, so the looser match is acceptable
//! here, unlike for free-form user text (see `user_skills`).

use tracing::{debug, warn};

use crate::providers::{JobSearchProvider, ProviderError};
use crate::vocabulary::{SkillSet, Vocabulary};

/// Every vocabulary entry contained in `description`, case-insensitively, in
/// vocabulary order.
pub fn scan_description(vocabulary: &Vocabulary, description: &str) -> SkillSet {
    let lowered = description.to_lowercase();
    vocabulary.substring_matches(&lowered).collect()
}

/// Queries the provider and scans the first listing. No listings, or a first
/// listing without a description, yields the empty set. Provider failures are
/// returned to the caller.
pub async fn fetch_required_skills(
    provider: &dyn JobSearchProvider,
    vocabulary: &Vocabulary,
    job_role: &str,
) -> Result<SkillSet, ProviderError> {
    let listings = provider.search_jobs(job_role).await?;

    let Some(first) = listings.first() else {
        debug!("No job listings found for '{job_role}'");
        return Ok(SkillSet::empty());
    };

    let description = first.job_description.as_deref().unwrap_or_default();
    Ok(scan_description(vocabulary, description))
}

/// Same as [`fetch_required_skills`] but folds a provider failure into the
/// empty set.
pub async fn extract_required_skills(
    provider: &dyn JobSearchProvider,
    vocabulary: &Vocabulary,
    job_role: &str,
) -> SkillSet {
    match fetch_required_skills(provider, vocabulary, job_role).await {
        Ok(skills) => skills,
        Err(e) => {
            warn!("Job search failed for '{job_role}', continuing with no required skills: {e}");
            SkillSet::empty()
        }
    }
}
