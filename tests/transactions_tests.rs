// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::models::{TransactionInput, TransactionKind};
use pocketledger::store::Store;
use pocketledger::{cli, commands::transactions};
use tempfile::{tempdir, TempDir};

fn setup() -> (TempDir, Store) {
    let dir = tempdir().unwrap();
    let mut store = Store::open_at(dir.path().join("ledger.json")).unwrap();
    for (i, kind) in [
        TransactionKind::Expense,
        TransactionKind::Expense,
        TransactionKind::Income,
    ]
    .iter()
    .enumerate()
    {
        store
            .add(TransactionInput {
                kind: *kind,
                amount: "10".parse().unwrap(),
                category: "Other".to_string(),
                description: "P".to_string(),
                date: NaiveDate::parse_from_str(&format!("2025-01-0{}", i + 1), "%Y-%m-%d")
                    .unwrap(),
            })
            .unwrap();
    }
    (dir, store)
}

#[test]
fn list_limit_respected() {
    let (_dir, store) = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["pocketledger", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::filter_rows(&store, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-01-03");
            assert_eq!(rows[1].date, "2025-01-02");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_filters_by_type_and_month() {
    let (_dir, store) = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "pocketledger",
        "tx",
        "list",
        "--type",
        "expense",
        "--month",
        "2025-01",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::filter_rows(&store, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert!(rows.iter().all(|r| r.kind == "expense"));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_of_other_month_is_empty() {
    let (_dir, store) = setup();
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["pocketledger", "tx", "list", "--month", "2025-02"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::filter_rows(&store, list_m).unwrap();
            assert!(rows.is_empty());
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}
