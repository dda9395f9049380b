//! CLI commands for xochitl-tools

pub mod dispatch;
pub mod find;
pub mod purge;
