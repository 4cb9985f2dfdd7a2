//! Host token resolution.

use std::net::{IpAddr, Ipv4Addr};

use super::host::{HostToken, ResolvedHost};
use crate::ports::{HostResolver, ResolveError};

/// Hostname rewritten to the IPv4 loopback address without a lookup.
pub const LOCALHOST: &str = "localhost";

/// Returns true if `candidate` is an IPv4 or IPv6 literal.
pub fn is_ip_literal(candidate: &str) -> bool {
    candidate.trim().parse::<IpAddr>().is_ok()
}

/// Replace the hostname segment of `token` with an IP literal.
///
/// `localhost` maps to `127.0.0.1`, IP literals are kept as written and
/// anything else takes the first address returned by `resolver`. Trailing
/// segments are never touched.
pub async fn resolve_host<R>(resolver: &R, token: &HostToken) -> Result<ResolvedHost, ResolveError>
where
    R: HostResolver + ?Sized,
{
    let (hostname, rest) = token.split_hostname();

    let address = if hostname == LOCALHOST {
        Ipv4Addr::LOCALHOST.to_string()
    } else if is_ip_literal(hostname) {
        hostname.to_string()
    } else {
        resolver
            .lookup(hostname)
            .await?
            .first()
            .ok_or_else(|| ResolveError::NotFound {
                host: hostname.to_string(),
            })?
            .to_string()
    };

    Ok(ResolvedHost::from_parts(&address, rest))
}

/// Resolve every token in order, stopping at the first failure.
pub async fn resolve_hosts<R>(
    resolver: &R,
    tokens: &[HostToken],
) -> Result<Vec<ResolvedHost>, ResolveError>
where
    R: HostResolver + ?Sized,
{
    let mut resolved = Vec::with_capacity(tokens.len());
    for token in tokens {
        resolved.push(resolve_host(resolver, token).await?);
    }
    Ok(resolved)
}
