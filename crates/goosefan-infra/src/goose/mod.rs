//! Migration runner backed by the `goose` command-line tool.

mod runner;

pub use runner::{GooseConfig, GooseRunner};
