//! Domain types - connection strings, host tokens and their resolution.

mod connection;
mod host;
mod resolve;

pub use connection::{ALT_HOSTS_PARAM, ConnectionString, Template};
pub use host::{HostToken, ResolvedHost};
pub use resolve::{LOCALHOST, is_ip_literal, resolve_host, resolve_hosts};
