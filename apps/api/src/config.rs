use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_JOB_SEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const DEFAULT_JOB_SEARCH_HOST: &str = "jsearch.p.rapidapi.com";
const DEFAULT_WEB_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// What the analysis does when the job-search provider call fails.
/// Zero listings is never a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobSearchFailurePolicy {
    /// Continue with an empty required-skill set.
    #[default]
    Degrade,
    /// Fail the whole analysis with a server error.
    Fail,
}

impl FromStr for JobSearchFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "fail" => Ok(Self::Fail),
            other => bail!("unknown job search failure policy '{other}' (expected 'degrade' or 'fail')"),
        }
    }
}

/// Settings shared by every outbound HTTP client.
#[derive(Debug, Clone)]
pub struct OutboundConfig {
    pub timeout: Duration,
    pub max_retries: u32,
}

/// Job-search provider (JSearch on RapidAPI) settings.
#[derive(Debug, Clone)]
pub struct JobSearchConfig {
    pub url: String,
    pub host: String,
    pub api_key: String,
}

/// Web-search provider (Google Custom Search) settings.
#[derive(Debug, Clone)]
pub struct WebSearchConfig {
    pub url: String,
    pub api_key: String,
    pub search_engine_id: String,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub job_search: JobSearchConfig,
    pub web_search: WebSearchConfig,
    pub outbound: OutboundConfig,
    pub enrichment_concurrency: usize,
    pub job_search_failure_policy: JobSearchFailurePolicy,
    pub vocabulary_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enrichment_concurrency: usize = parse_or(&lookup, "ENRICHMENT_CONCURRENCY", 2)?;
        if enrichment_concurrency == 0 {
            bail!("ENRICHMENT_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            job_search: JobSearchConfig::from_lookup(&lookup)?,
            web_search: WebSearchConfig {
                url: lookup("WEB_SEARCH_URL").unwrap_or_else(|| DEFAULT_WEB_SEARCH_URL.to_string()),
                api_key: require(&lookup, "GOOGLE_API_KEY")?,
                search_engine_id: require(&lookup, "SEARCH_ENGINE_ID")?,
            },
            outbound: OutboundConfig::from_lookup(&lookup)?,
            enrichment_concurrency,
            job_search_failure_policy: parse_or(
                &lookup,
                "JOB_SEARCH_FAILURE_POLICY",
                JobSearchFailurePolicy::Degrade,
            )?,
            vocabulary_path: lookup("SKILLS_VOCABULARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            port: parse_or(&lookup, "PORT", 5000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl JobSearchConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(JobSearchConfig {
            url: lookup("JOB_SEARCH_URL").unwrap_or_else(|| DEFAULT_JOB_SEARCH_URL.to_string()),
            host: lookup("JOB_SEARCH_HOST").unwrap_or_else(|| DEFAULT_JOB_SEARCH_HOST.to_string()),
            api_key: require(lookup, "RAPID_API_KEY")?,
        })
    }
}

impl OutboundConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_or(lookup, "OUTBOUND_TIMEOUT_SECS", 10)?;
        if timeout_secs == 0 {
            bail!("OUTBOUND_TIMEOUT_SECS must be at least 1");
        }
        Ok(OutboundConfig {
            timeout: Duration::from_secs(timeout_secs),
            max_retries: parse_or(lookup, "OUTBOUND_MAX_RETRIES", 0)?,
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{key} has an invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}
