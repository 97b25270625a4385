// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketledger::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = Store::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.persist()?;
            println!("Data file initialized at {}", store.path().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
