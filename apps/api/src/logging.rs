use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging. `RUST_LOG` in the environment wins; otherwise
/// the library, the calling binary (`bin_target`) and HTTP tracing log at
/// `default_level`.
pub fn init(bin_target: &str, default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{lib}={default_level},{bin_target}={default_level},tower_http={default_level}",
                lib = env!("CARGO_CRATE_NAME"),
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
