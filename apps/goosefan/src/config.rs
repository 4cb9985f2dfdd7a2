//! Application configuration loaded from flags and environment variables.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use goosefan_infra::GooseConfig;

use crate::telemetry::TelemetryConfig;

const DEFAULT_DB_ADDR: &str = "tcp://localhost:9000?database=marketdata&read_timeout=5&write_timeout=5&alt_hosts=localhost:9001,localhost:9002";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Run goose migrations against every host of a clustered connection string.
#[derive(Debug, Clone, Parser)]
#[command(name = "goosefan", version, about, long_about = None)]
pub struct AppConfig {
    /// Database connection address: primary host plus `alt_hosts`.
    #[arg(long, env = "DB_ADDR", default_value = DEFAULT_DB_ADDR)]
    pub db_addr: String,

    /// Goose environment to execute against.
    #[arg(long, env = "GOOSE_ENV", default_value = "development")]
    pub goose_env: String,

    /// Verbose output. The variable accepts `1`/`0`, `yes`/`no`, `on`/`off`.
    #[arg(
        long,
        env = "VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Goose binary to run.
    #[arg(long, env = "GOOSE_BIN", default_value = "goose")]
    pub goose_bin: PathBuf,

    /// Variable goose reads the single-host connection string from.
    #[arg(long, env = "DB_ADDR_VAR", default_value = "DB_ADDR")]
    pub db_addr_var: String,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn goose(&self) -> GooseConfig {
        GooseConfig {
            program: self.goose_bin.clone(),
            db_addr_var: self.db_addr_var.clone(),
        }
    }

    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            json_logs: self.log_format == LogFormat::Json,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "goosefan",
            "--db-addr",
            "tcp://db1:9000?database=x&alt_hosts=db2:9000",
            "--goose-env",
            "production",
            "--verbose",
            "--goose-bin",
            "/usr/local/bin/goose",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.db_addr, "tcp://db1:9000?database=x&alt_hosts=db2:9000");
        assert_eq!(config.goose_env, "production");
        assert!(config.verbose);
        assert_eq!(config.goose().program, PathBuf::from("/usr/local/bin/goose"));
        assert!(config.telemetry().json_logs);
        assert!(config.telemetry().verbose);
    }

    #[test]
    #[serial]
    fn test_verbose_from_environment() {
        for (value, expected) in [
            ("1", true),
            ("yes", true),
            ("on", true),
            ("true", true),
            ("0", false),
            ("off", false),
        ] {
            // SAFETY: serialized with every other test touching VERBOSE.
            unsafe { std::env::set_var("VERBOSE", value) };
            let config = AppConfig::try_parse_from(["goosefan"]);
            unsafe { std::env::remove_var("VERBOSE") };

            assert_eq!(config.unwrap().verbose, expected, "VERBOSE={value}");
        }
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(AppConfig::try_parse_from(["goosefan", "--no-such-flag"]).is_err());
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        assert!(AppConfig::try_parse_from(["goosefan", "--log-format", "xml"]).is_err());
    }
}
