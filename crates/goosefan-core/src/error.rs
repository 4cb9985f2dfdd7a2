//! Domain-level error types.

use thiserror::Error;

use crate::ports::{MigrationError, ResolveError};

/// Connection-string parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionStringError {
    #[error("Malformed connection string: {reason}")]
    Malformed { reason: &'static str },

    #[error("No port defined for primary host '{host}'")]
    MissingPort { host: String },
}

impl ConnectionStringError {
    pub(crate) fn malformed(reason: &'static str) -> Self {
        Self::Malformed { reason }
    }
}

/// Fan-out errors - anything that stops a migration run.
#[derive(Debug, Error)]
pub enum FanoutError {
    #[error(transparent)]
    ConnectionString(#[from] ConnectionStringError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Migration against {host} failed: {source}")]
    Migration {
        host: String,
        #[source]
        source: MigrationError,
    },
}
