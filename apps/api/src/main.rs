use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use navigator_api::analysis::enricher::ResourceEnricher;
use navigator_api::analysis::gate::AdmissionGate;
use navigator_api::config::Config;
use navigator_api::logging;
use navigator_api::providers::{build_http_client, GoogleSearchClient, JSearchClient};
use navigator_api::routes::build_router;
use navigator_api::state::AppState;
use navigator_api::vocabulary::Vocabulary;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    logging::init(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting Career Navigator API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &config.vocabulary_path {
        Some(path) => Vocabulary::from_file(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::builtin(),
    };
    info!("Vocabulary loaded ({} skills)", vocabulary.len());

    let http = build_http_client(&config.outbound)?;
    let job_search = JSearchClient::new(http.clone(), &config.job_search, &config.outbound);
    let web_search = GoogleSearchClient::new(http, &config.web_search, &config.outbound);
    info!(
        "Outbound clients initialized (timeout {:?}, retries {})",
        config.outbound.timeout, config.outbound.max_retries
    );

    // One gate for the whole process: the cap applies across all requests.
    let gate = AdmissionGate::new(config.enrichment_concurrency);
    info!("Enrichment admission gate capacity: {}", gate.capacity());

    let state = AppState {
        vocabulary: Arc::new(vocabulary),
        job_search: Arc::new(job_search),
        enricher: Arc::new(ResourceEnricher::new(
            Arc::new(web_search),
            gate,
            config.outbound.timeout,
        )),
        job_search_failure_policy: config.job_search_failure_policy,
    };
    info!("Job search failure policy: {:?}", config.job_search_failure_policy);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
