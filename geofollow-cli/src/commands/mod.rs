//! CLI command implementations.

pub mod follow;
