//! Command dispatch logic for xochitl-tools

use std::path::Path;

use tracing::debug;

use xochitl_core::config::StoreLocation;
use xochitl_core::error::Result;
use xochitl_core::store::Store;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Find(args) => {
            let store = open_store(args.folder.as_deref())?;
            commands::find::execute(cli, &store, args)
        }
        Commands::Purge(args) => {
            let store = open_store(args.folder.as_deref())?;
            commands::purge::execute(cli, &store, args)
        }
    }
}

fn open_store(folder: Option<&Path>) -> Result<Store> {
    let location = StoreLocation::resolve(folder);
    let store = Store::open(location.root())?;
    debug!(store = %store.root().display(), "open_store");
    Ok(store)
}
