//! Telemetry initialization.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Enable JSON logging.
    pub json_logs: bool,
    /// Log informational lines, not just warnings and errors.
    pub verbose: bool,
}

impl TelemetryConfig {
    fn default_directives(&self) -> &'static str {
        if self.verbose {
            "info,goosefan=debug"
        } else {
            "warn"
        }
    }
}

/// Initialize tracing. `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!(
        json_logs = config.json_logs,
        verbose = config.verbose,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_selects_filter() {
        let quiet = TelemetryConfig::default();
        assert_eq!(quiet.default_directives(), "warn");

        let verbose = TelemetryConfig {
            verbose: true,
            ..TelemetryConfig::default()
        };
        assert_eq!(verbose.default_directives(), "info,goosefan=debug");
    }
}
