//! Command implementations for the NBA projection CLI

pub mod rank;
