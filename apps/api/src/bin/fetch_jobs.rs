//! Fetches live listings for a set of role queries and writes the aggregated
//! required skills per role to a JSON file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use navigator_api::config::{JobSearchConfig, OutboundConfig};
use navigator_api::logging;
use navigator_api::providers::{build_http_client, JSearchClient};
use navigator_api::snapshot::{
    collect_role_snapshots, snapshot_vocabulary, write_snapshots, DEFAULT_QUERIES,
};
use navigator_api::vocabulary::Vocabulary;

#[derive(Debug, Parser)]
#[command(name = "fetch-jobs", version, about = "Snapshot required skills for a set of job queries")]
struct Args {
    /// Job queries, e.g. "Data Analyst in Bengaluru". Defaults to the built-in set.
    queries: Vec<String>,

    /// Where to write the JSON snapshot.
    #[arg(short, long, default_value = "api_skills_data.json")]
    out: PathBuf,

    /// Optional vocabulary file, one skill per line. Defaults to the snapshot skill list.
    #[arg(long, env = "SKILLS_VOCABULARY_PATH")]
    vocabulary: Option<PathBuf>,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(env!("CARGO_CRATE_NAME"), &args.log_level);

    let job_config = JobSearchConfig::from_env()?;
    let outbound = OutboundConfig::from_env()?;
    let client = JSearchClient::new(build_http_client(&outbound)?, &job_config, &outbound);

    let vocabulary = match &args.vocabulary {
        Some(path) => Vocabulary::from_file(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => snapshot_vocabulary(),
    };

    let queries: Vec<String> = if args.queries.is_empty() {
        DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect()
    } else {
        args.queries
    };

    info!("Starting to fetch data for {} job queries", queries.len());
    let snapshots = collect_role_snapshots(&client, &vocabulary, &queries).await;

    if write_snapshots(&args.out, &snapshots)? {
        info!(
            "Saved {} roles to {}",
            snapshots.len(),
            args.out.display()
        );
    } else {
        info!("No data was fetched for any query; {} not updated", args.out.display());
    }

    Ok(())
}
