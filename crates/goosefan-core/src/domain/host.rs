use std::fmt;

/// A raw `host:port[:suffix...]` token as written in a connection string.
///
/// The first colon-delimited segment is a hostname or IP literal; every
/// following segment is opaque and carried through resolution verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostToken(String);

impl HostToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits into the hostname segment and the untouched remainder.
    pub fn split_hostname(&self) -> (&str, Option<&str>) {
        match self.0.split_once(':') {
            Some((hostname, rest)) => (hostname, Some(rest)),
            None => (self.0.as_str(), None),
        }
    }
}

impl fmt::Display for HostToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A host token whose hostname segment has been replaced by an IP literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedHost(String);

impl ResolvedHost {
    /// Rebuilds a token from a resolved address and the original remainder.
    pub fn from_parts(address: &str, rest: Option<&str>) -> Self {
        match rest {
            Some(rest) => Self(format!("{address}:{rest}")),
            None => Self(address.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResolvedHost> for HostToken {
    fn from(host: ResolvedHost) -> Self {
        Self(host.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_trailing_segments() {
        let token = HostToken::new("clickhouse1:4500:tcp");
        assert_eq!(token.split_hostname(), ("clickhouse1", Some("4500:tcp")));
    }

    #[test]
    fn test_split_without_port() {
        let token = HostToken::new("clickhouse1");
        assert_eq!(token.split_hostname(), ("clickhouse1", None));
    }

    #[test]
    fn test_resolved_from_parts() {
        let host = ResolvedHost::from_parts("10.0.0.1", Some("9000:tcp"));
        assert_eq!(host.as_str(), "10.0.0.1:9000:tcp");
        assert_eq!(ResolvedHost::from_parts("10.0.0.1", None).to_string(), "10.0.0.1");
    }
}
