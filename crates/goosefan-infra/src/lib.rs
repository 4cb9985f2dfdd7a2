//! # Goosefan Infrastructure
//!
//! Concrete implementations of the ports defined in `goosefan-core`:
//! name lookups through the operating-system resolver and migration runs
//! through the `goose` binary.

pub mod dns;
pub mod goose;

pub use dns::SystemResolver;
pub use goose::{GooseConfig, GooseRunner};
