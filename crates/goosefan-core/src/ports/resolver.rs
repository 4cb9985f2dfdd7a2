use async_trait::async_trait;
use std::net::IpAddr;

/// Host resolver trait - abstraction over forward name lookups.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Look up the addresses of a hostname, in resolver order.
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}

/// Name resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid hostname '{host}': no addresses found")]
    NotFound { host: String },

    #[error("Invalid hostname '{host}': {source}")]
    Lookup {
        host: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// The hostname that failed to resolve.
    pub fn host(&self) -> &str {
        match self {
            ResolveError::NotFound { host } | ResolveError::Lookup { host, .. } => host,
        }
    }
}
