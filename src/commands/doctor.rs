// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::is_known_category;
use crate::store::Store;
use crate::utils::{month_key, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(store: &Store) -> Result<()> {
    let rows = audit(store);
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Scan the ledger for records that violate the data-model invariants.
pub fn audit(store: &Store) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for t in store.list() {
        // 1) Duplicate ids
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }

        // 2) Month key out of sync with the date
        let expected = month_key(t.date);
        if t.month != expected {
            rows.push(vec![
                "month_mismatch".into(),
                format!("{}: month '{}' but date {}", t.id, t.month, t.date),
            ]);
        }

        // 3) Direction is carried by the type, never by the sign
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("{}: {}", t.id, t.amount),
            ]);
        }

        // 4) Labels outside the suggested vocabulary (informational)
        if !is_known_category(t.kind, &t.category) {
            rows.push(vec![
                "unknown_category".into(),
                format!("{}: '{}'", t.id, t.category),
            ]);
        }
    }
    rows
}
