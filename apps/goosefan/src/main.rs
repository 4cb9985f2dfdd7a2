//! # Goosefan
//!
//! Applies goose migrations to the primary host and every `alt_hosts`
//! entry of a connection string, one host at a time.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use goosefan_core::ConnectionString;
use goosefan_infra::{GooseRunner, SystemResolver};

mod config;
mod fanout;
mod telemetry;

use config::AppConfig;
use fanout::{Fanout, FanoutReport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    telemetry::init_telemetry(&config.telemetry());

    match run(&config).await {
        Ok(report) => {
            tracing::info!(hosts = report.migrated.len(), "Migrations applied");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<FanoutReport> {
    let conn = ConnectionString::parse(&config.db_addr).context("Invalid db_addr")?;

    let fanout = Fanout::new(
        SystemResolver::new(),
        GooseRunner::new(config.goose()),
        config.goose_env.as_str(),
    );

    Ok(fanout.run(&conn).await?)
}
