//! Sequential migration fan-out across every host of a connection string.

use goosefan_core::domain::resolve_hosts;
use goosefan_core::ports::{HostResolver, MigrationError, MigrationInvocation, MigrationRunner};
use goosefan_core::{ConnectionString, FanoutError, ResolvedHost};

/// Hosts migrated by a successful run, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanoutReport {
    pub migrated: Vec<ResolvedHost>,
}

/// Resolves every host, then migrates them one at a time.
///
/// Stops at the first failure; later hosts are not attempted.
pub struct Fanout<R, M> {
    resolver: R,
    runner: M,
    environment: String,
}

impl<R, M> Fanout<R, M>
where
    R: HostResolver,
    M: MigrationRunner,
{
    pub fn new(resolver: R, runner: M, environment: impl Into<String>) -> Self {
        Self {
            resolver,
            runner,
            environment: environment.into(),
        }
    }

    pub async fn run(&self, conn: &ConnectionString) -> Result<FanoutReport, FanoutError> {
        let hosts = resolve_hosts(&self.resolver, conn.hosts()).await?;
        let listed: Vec<&str> = hosts.iter().map(ResolvedHost::as_str).collect();

        tracing::info!(hosts = ?listed, "Resolved hosts");
        tracing::info!(template = %conn.template(), "Connection string template");

        let mut migrated = Vec::with_capacity(hosts.len());
        for host in hosts {
            let invocation = MigrationInvocation {
                db_addr: conn.template().render(&host),
                environment: self.environment.clone(),
                host,
            };
            tracing::info!(
                host = %invocation.host,
                db_addr = %invocation.db_addr,
                "Applying migrations"
            );

            let output = match self.runner.apply(&invocation).await {
                Ok(output) => output,
                Err(source) => {
                    if let MigrationError::ExitStatus { output, .. } = &source {
                        tracing::error!(host = %invocation.host, "Goose output:\n{}", output.combined);
                    }
                    return Err(FanoutError::Migration {
                        host: invocation.host.to_string(),
                        source,
                    });
                }
            };

            tracing::info!(host = %invocation.host, "Goose output:\n{}", output.combined);
            migrated.push(invocation.host);
        }

        Ok(FanoutReport { migrated })
    }
}
