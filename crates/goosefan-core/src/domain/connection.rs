//! Multi-host connection strings.
//!
//! Grammar: `scheme://primary?param&...&alt_hosts=host2,host3,...`
//!
//! Anything after the primary host up to `?` (e.g. `/db`) stays part of the
//! primary token; a primary starting with `/` means a malformed scheme.

use std::fmt;
use std::str::FromStr;

use super::host::HostToken;
use crate::error::ConnectionStringError;

/// Query parameter listing the alternate hosts.
pub const ALT_HOSTS_PARAM: &str = "alt_hosts";

const SCHEME_SEPARATOR: &str = "//";

/// A parsed connection string: every host it names plus a single-host template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    hosts: Vec<HostToken>,
    template: Template,
}

impl ConnectionString {
    /// Parse a connection string literal.
    ///
    /// Hosts come back primary first, then the `alt_hosts` entries in listed
    /// order. The template drops the `alt_hosts` parameter and keeps every
    /// other parameter in place.
    pub fn parse(input: &str) -> Result<Self, ConnectionStringError> {
        let parts: Vec<&str> = input.split('?').collect();
        let [address, query] = parts[..] else {
            return Err(ConnectionStringError::malformed("multiple or no '?' signs"));
        };

        let address_parts: Vec<&str> = address.split(SCHEME_SEPARATOR).collect();
        let [scheme, primary] = address_parts[..] else {
            return Err(ConnectionStringError::malformed("invalid primary host"));
        };

        // Rejects single-slash schemes even when a '//' appears further on.
        if scheme.is_empty() || !scheme.ends_with(':') || scheme.contains('/') {
            return Err(ConnectionStringError::malformed("invalid scheme separator"));
        }
        if primary.is_empty() || primary.starts_with('/') {
            return Err(ConnectionStringError::malformed("invalid primary host"));
        }
        if !primary.contains(':') {
            return Err(ConnectionStringError::MissingPort {
                host: primary.to_string(),
            });
        }

        let mut hosts = vec![HostToken::new(primary)];
        let mut params = Vec::new();

        for param in query.split('&') {
            let (name, value) = param.split_once('=').unwrap_or((param, ""));
            if name != ALT_HOSTS_PARAM {
                params.push(param);
                continue;
            }
            if value.is_empty() {
                continue;
            }
            for alt in value.split(',') {
                if alt.is_empty() {
                    return Err(ConnectionStringError::malformed("empty entry in alt_hosts"));
                }
                hosts.push(HostToken::new(alt));
            }
        }

        Ok(Self {
            hosts,
            template: Template {
                prefix: format!("{scheme}{SCHEME_SEPARATOR}"),
                query: params.join("&"),
            },
        })
    }

    /// All hosts, primary first.
    pub fn hosts(&self) -> &[HostToken] {
        &self.hosts
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}

impl FromStr for ConnectionString {
    type Err = ConnectionStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Connection string with the host part left open.
///
/// Displays with a `%s` placeholder, e.g. `tcp://%s?database=marketdata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    query: String,
}

impl Template {
    pub const PLACEHOLDER: &'static str = "%s";

    /// Build the single-host connection string for `host`.
    pub fn render(&self, host: impl fmt::Display) -> String {
        format!("{}{}?{}", self.prefix, host, self.query)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}?{}", self.prefix, Self::PLACEHOLDER, self.query)
    }
}
