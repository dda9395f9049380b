//! `xochitl-tools purge` - permanently remove soft-deleted items
//!
//! Collects every record flagged deleted, lists the candidates sorted by
//! name, asks for confirmation, then unlinks the backing files one at a
//! time. Only the literal input `yes` confirms; anything else aborts. A
//! per-file deletion failure is reported and the purge continues.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use xochitl_core::error::Result;
use xochitl_core::store::{Entry, Store};

use crate::cli::{Cli, OutputFormat, PurgeArgs};

/// Execute the purge command
pub fn execute(cli: &Cli, store: &Store, args: &PurgeArgs) -> Result<()> {
    let mut candidates = Vec::new();
    for entry in store.entries() {
        match entry {
            Ok(entry) if entry.metadata.deleted => candidates.push(entry),
            Ok(_) => {}
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    if cli.format == OutputFormat::Human && !cli.quiet {
        println!("Found {} deleted files.", candidates.len());
    }
    if candidates.is_empty() {
        match cli.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Human if !cli.quiet => println!("No files to delete, exiting."),
            OutputFormat::Human => {}
        }
        return Ok(());
    }

    // Stable, human-reviewable listing.
    candidates.sort_by(|a, b| a.metadata.visible_name.cmp(&b.metadata.visible_name));

    match cli.format {
        OutputFormat::Json => {
            let listing: Vec<_> = candidates
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "name": entry.metadata.visible_name,
                        "id": entry.id,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Human => {
            println!("Deleted files:");
            for entry in &candidates {
                println!("\t{}", entry.metadata.visible_name);
            }
        }
    }

    if !args.yes && !confirm()? {
        println!("Aborting...");
        return Ok(());
    }

    for entry in &candidates {
        remove_entry(store, entry, args.all_sidecars, cli.quiet);
    }

    Ok(())
}

/// Single prompt; only the literal `yes` confirms
fn confirm() -> Result<bool> {
    print!("Are you sure you want to permanently delete all these files? (yes/no): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim() == "yes"
}

fn remove_entry(store: &Store, entry: &Entry, all_sidecars: bool, quiet: bool) {
    let paths = if all_sidecars {
        match store.sidecar_paths(&entry.id) {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("Warning: failed to list sidecars of {}: {}", entry.id, e);
                vec![entry.path.clone()]
            }
        }
    } else {
        vec![entry.path.clone()]
    };

    let mut removed = 0usize;
    for path in &paths {
        if let Err(e) = remove_path(path) {
            eprintln!("Warning: failed to delete {}: {}", path.display(), e);
            continue;
        }
        removed += 1;
    }

    debug!(id = %entry.id, files = removed, "purged");
    if removed > 0 && !quiet {
        println!("Deleted {}", entry.id);
    }
}

fn remove_path(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
