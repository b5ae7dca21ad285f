//! CLI command implementations

pub mod generate;
pub mod profiles;
pub mod scenarios;
pub mod simulate;
