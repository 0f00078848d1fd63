//! Offline role snapshots: required skills per role, aggregated across every
//! listing the job-search provider returns, for seeding the front-end charts.
//!
//! Used by the `fetch-jobs` binary. Queries run one after another; a query
//! that fails or finds nothing is logged and skipped.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::providers::JobSearchProvider;
use crate::vocabulary::{SkillSet, Vocabulary};

/// Location suffix dropped from a query to form the display title.
pub const LOCATION_SUFFIX: &str = " in Bengaluru";

/// The narrower skill list the snapshot job has always scanned for. It keeps
/// "excel", which the analysis dictionary does not carry.
#[rustfmt::skip]
pub const SNAPSHOT_SKILLS: &[&str] = &[
    "html", "css", "javascript", "react", "redux", "typescript", "angular", "vue", "node.js",
    "express.js", "git", "webpack", "jest", "figma", "sketch", "adobe xd", "sql", "python",
    "pandas", "numpy", "tableau", "power bi", "excel", "mongodb", "postgresql", "docker", "graphql",
];

pub const DEFAULT_QUERIES: &[&str] = &[
    "Frontend Developer in Bengaluru",
    "Backend Developer Nodejs in Bengaluru",
    "Data Analyst in Bengaluru",
    "UI/UX Designer in Bengaluru",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSnapshot {
    pub id: u32,
    pub job_title: String,
    pub required_skills: Vec<String>,
}

pub fn snapshot_vocabulary() -> Vocabulary {
    Vocabulary::new(SNAPSHOT_SKILLS.iter().copied()).expect("snapshot vocabulary is valid")
}

/// The query without a trailing [`LOCATION_SUFFIX`]. Any other location is
/// kept as part of the title.
pub fn display_title(query: &str) -> &str {
    let query = query.trim();
    query.strip_suffix(LOCATION_SUFFIX).unwrap_or(query)
}

pub async fn collect_role_snapshots<S: AsRef<str>>(
    provider: &dyn JobSearchProvider,
    vocabulary: &Vocabulary,
    queries: &[S],
) -> Vec<RoleSnapshot> {
    let mut snapshots = Vec::new();

    for query in queries {
        let query: &str = query.as_ref();
        info!("Fetching listings for \"{query}\"");

        let listings = match provider.search_jobs(query).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Job search failed for \"{query}\": {e}");
                continue;
            }
        };
        if listings.is_empty() {
            warn!("No jobs found for \"{query}\"");
            continue;
        }
        info!("Found {} job listings", listings.len());

        let descriptions: Vec<String> = listings
            .iter()
            .map(|l| l.job_description.as_deref().unwrap_or_default().to_lowercase())
            .collect();
        let skills: SkillSet = vocabulary
            .labels()
            .filter(|skill| descriptions.iter().any(|d| d.contains(skill)))
            .collect();
        info!("Extracted {} unique skills", skills.len());

        snapshots.push(RoleSnapshot {
            id: snapshots.len() as u32 + 1,
            job_title: display_title(query).to_string(),
            required_skills: skills.into_vec(),
        });
    }

    snapshots
}

/// Writes the snapshots as pretty JSON. An empty batch leaves any existing
/// file untouched and returns `false`.
pub fn write_snapshots(path: &Path, snapshots: &[RoleSnapshot]) -> Result<bool> {
    if snapshots.is_empty() {
        return Ok(false);
    }
    let json = serde_json::to_string_pretty(snapshots)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshots to {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use crate::providers::{JobListing, ProviderError};

    struct ScriptedJobs(HashMap<&'static str, Option<Vec<&'static str>>>);

    #[async_trait]
    impl JobSearchProvider for ScriptedJobs {
        async fn search_jobs(&self, query: &str) -> Result<Vec<JobListing>, ProviderError> {
            match self.0.get(query) {
                Some(Some(descriptions)) => Ok(descriptions
                    .iter()
                    .map(|d| JobListing {
                        job_description: Some(d.to_string()),
                    })
                    .collect()),
                Some(None) => Err(ProviderError::Api {
                    status: 500,
                    message: "boom".to_string(),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    #[test]
    fn test_display_title_strips_location() {
        assert_eq!(display_title("Frontend Developer in Bengaluru"), "Frontend Developer");
        assert_eq!(display_title("UI/UX Designer in Bengaluru"), "UI/UX Designer");
        assert_eq!(display_title("Data Analyst"), "Data Analyst");
    }

    #[test]
    fn test_display_title_keeps_other_locations() {
        assert_eq!(display_title("Data Scientist in Healthcare"), "Data Scientist in Healthcare");
        assert_eq!(display_title("Backend Developer in Pune"), "Backend Developer in Pune");
    }

    #[test]
    fn test_snapshot_vocabulary_matches_shipped_list() {
        let vocabulary = snapshot_vocabulary();
        assert_eq!(vocabulary.len(), 27);
        assert!(vocabulary.contains("excel"));
        assert!(!Vocabulary::builtin().contains("excel"));
    }

    #[tokio::test]
    async fn test_snapshot_vocabulary_picks_up_excel_for_analysts() {
        let provider = ScriptedJobs(HashMap::from([(
            "Data Analyst in Bengaluru",
            Some(vec!["Advanced Excel and SQL; Tableau dashboards a plus"]),
        )]));

        let snapshots =
            collect_role_snapshots(&provider, &snapshot_vocabulary(), &["Data Analyst in Bengaluru"])
                .await;

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].job_title, "Data Analyst");
        assert_eq!(snapshots[0].required_skills, vec!["sql", "tableau", "excel"]);
    }

    #[tokio::test]
    async fn test_skills_are_unioned_across_listings() {
        let vocabulary = Vocabulary::new(["html", "css", "react", "sql"]).unwrap();
        let provider = ScriptedJobs(HashMap::from([(
            "Frontend Developer in Bengaluru",
            Some(vec!["React and CSS", "HTML, CSS"]),
        )]));

        let snapshots =
            collect_role_snapshots(&provider, &vocabulary, &["Frontend Developer in Bengaluru"]).await;

        assert_eq!(
            snapshots,
            vec![RoleSnapshot {
                id: 1,
                job_title: "Frontend Developer".to_string(),
                required_skills: vec!["html".to_string(), "css".to_string(), "react".to_string()],
            }]
        );
    }

    #[tokio::test]
    async fn test_failed_and_empty_queries_are_skipped_and_ids_stay_consecutive() {
        let vocabulary = Vocabulary::new(["sql", "excel", "figma"]).unwrap();
        let provider = ScriptedJobs(HashMap::from([
            ("Broken in Pune", None),
            ("Data Analyst in Bengaluru", Some(vec!["SQL and Excel"])),
            ("UI/UX Designer in Bengaluru", Some(vec!["Figma"])),
        ]));

        let snapshots = collect_role_snapshots(
            &provider,
            &vocabulary,
            &[
                "Broken in Pune",
                "Nothing in Nowhere",
                "Data Analyst in Bengaluru",
                "UI/UX Designer in Bengaluru",
            ],
        )
        .await;

        let summary: Vec<(u32, &str)> = snapshots
            .iter()
            .map(|s| (s.id, s.job_title.as_str()))
            .collect();
        assert_eq!(summary, vec![(1, "Data Analyst"), (2, "UI/UX Designer")]);
    }

    #[test]
    fn test_write_snapshots_uses_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_skills_data.json");
        let snapshots = vec![RoleSnapshot {
            id: 1,
            job_title: "Data Analyst".to_string(),
            required_skills: vec!["sql".to_string()],
        }];

        assert!(write_snapshots(&path, &snapshots).unwrap());
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!([{"id": 1, "jobTitle": "Data Analyst", "requiredSkills": ["sql"]}])
        );
    }

    #[test]
    fn test_empty_batch_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_skills_data.json");
        std::fs::write(&path, "previous").unwrap();

        assert!(!write_snapshots(&path, &[]).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
    }
}
