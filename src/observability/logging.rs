//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Honor `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr so CLI output on stdout stays machine-readable

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a configured level.
pub fn default_directive(log_level: &str) -> String {
    format!("operadora_router={log_level},route_cli={log_level},tower_http={log_level}")
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    // Only fails when a global subscriber is already set; the first one wins
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive("debug"),
            "operadora_router=debug,route_cli=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("info");
        init("debug");
    }
}
