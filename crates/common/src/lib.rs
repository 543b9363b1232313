//! Shared building blocks for the record service crates.

pub mod types;
pub mod utils;
