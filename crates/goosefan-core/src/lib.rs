//! # Goosefan Core
//!
//! The domain layer of goosefan.
//! Parses multi-host connection strings and resolves host tokens, with
//! every side effect (DNS, spawning the migration tool) behind a port.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{ConnectionString, HostToken, ResolvedHost, Template};
pub use error::{ConnectionStringError, FanoutError};
