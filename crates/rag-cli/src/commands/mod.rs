//! Subcommand implementations.

pub mod check;
pub mod extract;
pub mod init;
pub mod list_rules;
pub mod output;
