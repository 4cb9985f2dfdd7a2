//! Ports - trait definitions for external dependencies.
//! Infrastructure provides the DNS and process-spawning implementations.

mod migrator;
mod resolver;

pub use migrator::{MigrationError, MigrationInvocation, MigrationOutput, MigrationRunner};
pub use resolver::{HostResolver, ResolveError};
