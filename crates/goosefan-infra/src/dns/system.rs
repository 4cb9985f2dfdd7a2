//! System resolver using the operating system's `getaddrinfo`.

use std::net::IpAddr;

use async_trait::async_trait;

use goosefan_core::ports::{HostResolver, ResolveError};

/// Forward lookups through the OS resolver (`/etc/hosts`, `/etc/resolv.conf`).
///
/// `tokio::net::lookup_host` runs the blocking call on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        tracing::debug!(host = %host, "resolving via getaddrinfo");

        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|source| {
                tracing::debug!(host = %host, error = %source, "DNS resolution failed");
                ResolveError::Lookup {
                    host: host.to_string(),
                    source,
                }
            })?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(ResolveError::NotFound {
                host: host.to_string(),
            });
        }

        tracing::debug!(host = %host, count = addrs.len(), "DNS resolution complete");
        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_ip_literal_passes_through() {
        let addrs = SystemResolver::new().lookup("10.253.1.24").await.unwrap();
        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::new(10, 253, 1, 24))]);
    }

    #[tokio::test]
    async fn test_reserved_name_fails() {
        // `.invalid` is reserved and never resolves (RFC 6761).
        let err = SystemResolver::new()
            .lookup("goosefan.invalid")
            .await
            .unwrap_err();
        assert_eq!(err.host(), "goosefan.invalid");
    }
}
