//! Logging bootstrap for the binaries.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and request tracing.

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::LoggingConfig;

/// Default filter directive for a configured level
pub fn filter_directive(level: &str) -> String {
    format!("rose_csm={level},tower_http={level}")
}

/// Install the global tracing subscriber
///
/// Format `json` emits one JSON object per line; anything else is the
/// human-readable formatter.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug"), "rose_csm=debug,tower_http=debug");
    }
}
