//! CLI command implementations

pub mod links;
pub mod rank;
