//! CLI argument parsing and typed value types.

pub mod args;
pub mod types;

pub use args::{Commands, NbaProj};
