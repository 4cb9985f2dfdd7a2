//! Host resolver implementations.

mod system;

pub use system::SystemResolver;
