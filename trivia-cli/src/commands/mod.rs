//! Subcommand implementations

pub mod database;
pub mod serve;
