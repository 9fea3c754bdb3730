//! Structured logging setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at the configured level.
pub fn init(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(&config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

fn default_directive(level: &str) -> String {
    format!("filter_chain={level}")
}
