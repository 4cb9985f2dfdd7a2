use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use goosefan_core::ports::{MigrationError, MigrationInvocation, MigrationOutput, MigrationRunner};

const GOOSE_ACTION: &str = "up";

/// Goose invocation settings.
#[derive(Debug, Clone)]
pub struct GooseConfig {
    /// Path or name of the goose binary.
    pub program: PathBuf,
    /// Environment variable goose reads the connection string from.
    pub db_addr_var: String,
}

impl Default for GooseConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("goose"),
            db_addr_var: "DB_ADDR".to_string(),
        }
    }
}

/// Runs `goose -env <environment> up` once per invocation.
///
/// The connection string is set on the child's environment only; the
/// parent process environment is left alone.
#[derive(Debug, Clone, Default)]
pub struct GooseRunner {
    config: GooseConfig,
}

impl GooseRunner {
    pub fn new(config: GooseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MigrationRunner for GooseRunner {
    async fn apply(
        &self,
        invocation: &MigrationInvocation,
    ) -> Result<MigrationOutput, MigrationError> {
        tracing::debug!(
            program = %self.config.program.display(),
            environment = %invocation.environment,
            host = %invocation.host,
            "running goose"
        );

        let output = Command::new(&self.config.program)
            .arg("-env")
            .arg(&invocation.environment)
            .arg(GOOSE_ACTION)
            .env(&self.config.db_addr_var, &invocation.db_addr)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| MigrationError::Spawn {
                program: self.config.program.display().to_string(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let captured = MigrationOutput { combined };

        if !output.status.success() {
            return Err(MigrationError::ExitStatus {
                status: output.status,
                output: captured,
            });
        }

        Ok(captured)
    }
}
