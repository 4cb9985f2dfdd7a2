//! Migration runner port - abstraction over the external migration tool.

use async_trait::async_trait;
use std::process::ExitStatus;

use crate::domain::ResolvedHost;

/// One migration run against a single host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationInvocation {
    /// Host the run targets.
    pub host: ResolvedHost,
    /// Single-host connection string handed to the tool.
    pub db_addr: String,
    /// Tool environment name (e.g. `development`).
    pub environment: String,
}

/// Captured output of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationOutput {
    /// Standard output followed by standard error.
    pub combined: String,
}

/// Migration runner trait - applies pending migrations to one host.
#[async_trait]
pub trait MigrationRunner: Send + Sync {
    async fn apply(&self, invocation: &MigrationInvocation)
    -> Result<MigrationOutput, MigrationError>;
}

/// Migration tool failures.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Unable to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Migration tool exited with {status}")]
    ExitStatus {
        status: ExitStatus,
        output: MigrationOutput,
    },
}
