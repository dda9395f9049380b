//! Core domain logic for the xochitl metadata store tools
//!
//! The store is a flat directory of JSON sidecar files, one `<id>.metadata`
//! record per document or folder, plus an optional `<id>.content` sidecar
//! with extended fields. This crate owns record parsing, the tolerant
//! directory scan, and ancestry path resolution; the binary crate layers
//! the CLI on top.

pub mod ancestry;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod record;
pub mod store;
