//! Skill-gap pipeline: extract → diff → enrich → assemble.
//!
//! The two extractions run side by side; enrichment starts only after the gap
//! is known, and the result is built only after every lookup has finished.

use tracing::{error, info};

use crate::analysis::enricher::ResourceEnricher;
use crate::analysis::gap::compute_gap;
use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::analysis::requirements::{extract_required_skills, fetch_required_skills};
use crate::analysis::user_skills::extract_user_skills;
use crate::config::JobSearchFailurePolicy;
use crate::errors::AppError;
use crate::providers::JobSearchProvider;
use crate::vocabulary::{SkillSet, Vocabulary};

pub async fn analyze_skill_gap(
    vocabulary: &Vocabulary,
    job_search: &dyn JobSearchProvider,
    enricher: &ResourceEnricher,
    policy: JobSearchFailurePolicy,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AppError> {
    let required = async {
        match policy {
            JobSearchFailurePolicy::Degrade => {
                Ok(extract_required_skills(job_search, vocabulary, &request.job_role).await)
            }
            JobSearchFailurePolicy::Fail => {
                fetch_required_skills(job_search, vocabulary, &request.job_role)
                    .await
                    .map_err(|e| {
                        error!("Job search failed for '{}': {e}", request.job_role);
                        AppError::Upstream(format!("job search failed: {e}"))
                    })
            }
        }
    };
    let user = async { extract_user_skills(vocabulary, &request.user_text) };

    let (required, user): (Result<SkillSet, AppError>, SkillSet) = tokio::join!(required, user);
    let required = required?;

    let gap = compute_gap(&required, &user);
    info!(
        required = required.len(),
        matched = gap.matched.len(),
        missing = gap.missing.len(),
        "Computed skill gap"
    );

    let missing_skills = enricher.enrich(&gap.missing).await;

    Ok(AnalysisResult {
        job_title: request.job_role.clone(),
        required_skills: required,
        matched_skills: gap.matched,
        missing_skills,
    })
}
