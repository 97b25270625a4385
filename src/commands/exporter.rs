// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::store::Store;
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // Oldest first
    let mut txs: Vec<Transaction> = store.list().to_vec();
    txs.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "type",
                "amount",
                "category",
                "description",
                "date",
                "month",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.clone(),
                    t.kind.as_str().to_string(),
                    format!("{:.2}", t.amount),
                    t.category.clone(),
                    t.description.clone(),
                    t.date.to_string(),
                    t.month.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
        other => {
            anyhow::bail!("Unknown format: {} (use csv|json)", other);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
