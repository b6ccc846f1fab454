//! Types and helpers shared by every crate of the branch registry.

pub mod types;
pub mod utils;
