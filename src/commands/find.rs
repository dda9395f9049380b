//! `xochitl-tools find` - locate notebooks by name
//!
//! Filters the store scan by name, document type and deletion state, then
//! resolves each match's folder path and prints an identity block. Folders
//! are never returned, whatever their name. A match whose ancestry cannot
//! be resolved is still reported, with the path marked unresolved.

use serde_json::json;
use tracing::debug;

use xochitl_core::ancestry;
use xochitl_core::error::Result;
use xochitl_core::format::{human_size, local_timestamp};
use xochitl_core::store::{Entry, Store};

use crate::cli::{Cli, FindArgs, OutputFormat};

/// Execute the find command
pub fn execute(cli: &Cli, store: &Store, args: &FindArgs) -> Result<()> {
    if !cli.quiet && cli.format == OutputFormat::Human {
        if args.exact {
            println!("Searching for notebook named '{}'...", args.notebook_name);
        } else {
            println!(
                "Searching for notebook containing '{}'...",
                args.notebook_name.to_lowercase()
            );
        }
    }

    let mut matches = Vec::new();
    for entry in store.entries() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };
        if !name_matches(&entry, args) {
            continue;
        }
        if !entry.metadata.is_notebook() {
            continue;
        }
        if entry.metadata.deleted && !args.deleted {
            continue;
        }
        matches.push(entry);
    }

    debug!(matches = matches.len(), "scan_complete");

    match cli.format {
        OutputFormat::Human => {
            for entry in &matches {
                report(store, entry, args);
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = matches
                .iter()
                .map(|entry| json_report(store, entry, args))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn name_matches(entry: &Entry, args: &FindArgs) -> bool {
    let name = &entry.metadata.visible_name;
    if args.exact {
        name == &args.notebook_name
    } else {
        name.to_lowercase()
            .contains(&args.notebook_name.to_lowercase())
    }
}

fn report(store: &Store, entry: &Entry, args: &FindArgs) {
    println!("Name: '{}'", entry.metadata.visible_name);
    println!("\tUUID: '{}'", entry.id);
    println!("\tSystem Path: {}*", entry.sidecar_prefix().display());

    match ancestry::resolve_path(store, entry) {
        Ok(segments) => println!("\tRemarkable Path: {}", segments.join("/")),
        Err(e) => println!("\tRemarkable Path: <unresolved> ({})", e),
    }

    if args.deleted && entry.metadata.deleted {
        println!("\tViewing Deleted File");
    }

    if args.extra {
        report_extra(store, entry);
    }
}

/// Extended fields are each best-effort: absent or malformed data is
/// omitted, never a failure.
fn report_extra(store: &Store, entry: &Entry) {
    if let Some(modified) = entry.metadata.last_modified.and_then(local_timestamp) {
        println!("\tLast Modified: {}", modified);
    }
    if let Some(opened) = entry.metadata.last_opened.and_then(local_timestamp) {
        match entry.metadata.last_opened_page {
            Some(page) => println!("\tLast Opened: {} (page {})", opened, page),
            None => println!("\tLast Opened: {}", opened),
        }
    }

    let info = store.content_info(&entry.id).unwrap_or_default();
    if let Some(pages) = info.page_count {
        println!("\tNum Pages: {}", pages);
    }
    if let Some(file_type) = &info.file_type {
        println!("\tFile Type: {}", file_type);
    }
    if let Some(size) = info.size_in_bytes {
        println!("\tSize: {}", human_size(size));
    }
}

fn json_report(store: &Store, entry: &Entry, args: &FindArgs) -> serde_json::Value {
    let mut obj = json!({
        "name": entry.metadata.visible_name,
        "id": entry.id,
        "system_path": format!("{}*", entry.sidecar_prefix().display()),
        "deleted": entry.metadata.deleted,
    });

    match ancestry::resolve_path(store, entry) {
        Ok(segments) => obj["path"] = json!(segments.join("/")),
        Err(e) => obj["path_error"] = json!(e.to_string()),
    }

    if args.extra {
        let info = store.content_info(&entry.id).unwrap_or_default();
        obj["extra"] = json!({
            "last_modified": entry.metadata.last_modified.and_then(local_timestamp),
            "last_opened": entry.metadata.last_opened.and_then(local_timestamp),
            "last_opened_page": entry.metadata.last_opened_page,
            "page_count": info.page_count,
            "file_type": info.file_type,
            "size_in_bytes": info.size_in_bytes,
        });
    }

    obj
}
