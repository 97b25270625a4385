// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::models::{TransactionInput, TransactionKind, TransactionPatch};
use pocketledger::store::Store;
use rust_decimal::Decimal;
use tempfile::{tempdir, TempDir};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn amount(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn input(kind: TransactionKind, amt: &str, category: &str, day: &str) -> TransactionInput {
    TransactionInput {
        kind,
        amount: amount(amt),
        category: category.to_string(),
        description: format!("{} on {}", category, day),
        date: date(day),
    }
}

fn temp_store() -> (TempDir, Store) {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path().join("ledger.json")).unwrap();
    (dir, store)
}

#[test]
fn missing_slot_starts_empty() {
    let (_dir, store) = temp_store();
    assert!(store.list().is_empty());
}

#[test]
fn add_assigns_unique_ids_and_month() {
    let (_dir, mut store) = temp_store();
    let a = store
        .add(input(TransactionKind::Income, "1000", "Salary", "2024-01-01"))
        .unwrap();
    let b = store
        .add(input(TransactionKind::Expense, "400", "Food & Dining", "2024-01-05"))
        .unwrap();
    let c = store
        .add(input(TransactionKind::Expense, "200", "Food & Dining", "2024-01-10"))
        .unwrap();

    assert_eq!(store.list().len(), 3);
    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
    for t in store.list() {
        assert_eq!(t.month, t.date.format("%Y-%m").to_string());
    }
    // Insertion order preserved
    assert_eq!(store.list()[0].id, a.id);
    assert_eq!(store.list()[2].id, c.id);
}

#[test]
fn add_rejects_invalid_input() {
    let (_dir, mut store) = temp_store();
    let zero = TransactionInput {
        amount: Decimal::ZERO,
        ..input(TransactionKind::Expense, "1", "Food & Dining", "2024-01-05")
    };
    assert!(store.add(zero).is_err());

    let blank_desc = TransactionInput {
        description: "  ".to_string(),
        ..input(TransactionKind::Expense, "5", "Food & Dining", "2024-01-05")
    };
    assert!(store.add(blank_desc).is_err());

    let blank_cat = TransactionInput {
        category: String::new(),
        ..input(TransactionKind::Expense, "5", "Food & Dining", "2024-01-05")
    };
    assert!(store.add(blank_cat).is_err());

    assert!(store.list().is_empty());
}

#[test]
fn update_merges_only_given_fields() {
    let (_dir, mut store) = temp_store();
    let tx = store
        .add(input(TransactionKind::Expense, "40", "Shopping", "2024-03-02"))
        .unwrap();

    store
        .update(
            &tx.id,
            TransactionPatch {
                amount: Some(amount("55.50")),
                ..Default::default()
            },
        )
        .unwrap();

    let got = &store.list()[0];
    assert_eq!(got.amount, amount("55.50"));
    assert_eq!(got.category, "Shopping");
    assert_eq!(got.description, tx.description);
    assert_eq!(got.date, tx.date);
    assert_eq!(got.month, "2024-03");
}

#[test]
fn update_date_recomputes_month() {
    let (_dir, mut store) = temp_store();
    let tx = store
        .add(input(TransactionKind::Expense, "40", "Travel", "2024-03-02"))
        .unwrap();

    store
        .update(
            &tx.id,
            TransactionPatch {
                date: Some(date("2024-07-15")),
                ..Default::default()
            },
        )
        .unwrap();

    let got = &store.list()[0];
    assert_eq!(got.date, date("2024-07-15"));
    assert_eq!(got.month, "2024-07");
}

#[test]
fn update_unknown_id_is_noop() {
    let (_dir, mut store) = temp_store();
    store
        .add(input(TransactionKind::Income, "10", "Gift", "2024-02-01"))
        .unwrap();
    let before = store.list().to_vec();

    store
        .update(
            "no-such-id",
            TransactionPatch {
                amount: Some(amount("999")),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(store.list(), &before[..]);
}

#[test]
fn delete_removes_once_then_noop() {
    let (_dir, mut store) = temp_store();
    let a = store
        .add(input(TransactionKind::Income, "10", "Gift", "2024-02-01"))
        .unwrap();
    store
        .add(input(TransactionKind::Expense, "20", "Utilities", "2024-02-02"))
        .unwrap();

    store.delete(&a.id).unwrap();
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].category, "Utilities");

    store.delete(&a.id).unwrap();
    assert_eq!(store.list().len(), 1);
}

#[test]
fn round_trip_reload_preserves_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut store = Store::open_at(&path).unwrap();
    store
        .add(input(TransactionKind::Income, "1234.56", "Salary", "2024-01-01"))
        .unwrap();
    store
        .add(input(TransactionKind::Expense, "78.90", "Food & Dining", "2024-01-05"))
        .unwrap();
    let written = store.list().to_vec();

    let reloaded = Store::open_at(&path).unwrap();
    assert_eq!(reloaded.list(), &written[..]);
}

#[test]
fn corrupt_slot_falls_back_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let mut store = Store::open_at(&path).unwrap();
    assert!(store.list().is_empty());

    // A fresh ledger is usable after recovery
    store
        .add(input(TransactionKind::Income, "10", "Salary", "2024-04-01"))
        .unwrap();
    let reloaded = Store::open_at(&path).unwrap();
    assert_eq!(reloaded.list().len(), 1);
}
