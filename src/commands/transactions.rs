// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::recent_transactions;
use crate::models::{Transaction, TransactionInput};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, parse_kind, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let tx = store.add(TransactionInput {
        kind,
        amount,
        category,
        description,
        date,
    })?;
    println!(
        "Recorded {} of {} in '{}' on {} (id: {})",
        tx.kind.as_str(),
        tx.amount,
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = filter_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Amount", "Category", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete(id)?;
    println!("Removed transaction {}", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            kind: t.kind.as_str().to_string(),
            amount: format!("{:.2}", t.amount),
            category: t.category.clone(),
            description: t.description.clone(),
        }
    }
}

pub fn filter_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut txs: Vec<Transaction> = store.list().to_vec();
    if let Some(month) = sub.get_one::<String>("month") {
        txs.retain(|t| &t.month == month);
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        let kind = parse_kind(kind)?;
        txs.retain(|t| t.kind == kind);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        txs.retain(|t| &t.category == cat);
    }
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(txs.len());
    Ok(recent_transactions(&txs, limit)
        .iter()
        .map(TransactionRow::from)
        .collect())
}
