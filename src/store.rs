// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionInput, TransactionPatch};
use crate::utils::month_key;
use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketledger", "pocketledger"));

/// Name of the durable slot holding the serialized transaction list.
pub const STORAGE_KEY: &str = "finance-dashboard-data";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(format!("{}.json", STORAGE_KEY)))
}

/// Owns the authoritative transaction list and keeps it durable across
/// restarts. Every mutation rewrites the whole slot; fine for personal
/// datasets, no attempt at delta persistence.
pub struct Store {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Store {
    pub fn open_or_init() -> Result<Store> {
        Store::open_at(store_path()?)
    }

    /// Open a store backed by an explicit slot path. A missing slot means a
    /// fresh ledger; an unreadable or malformed slot is reported on stderr
    /// and treated as empty rather than aborting startup.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Store> {
        let path = path.into();
        let transactions = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<Transaction>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    eprintln!(
                        "warning: ignoring malformed data in {}: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                eprintln!("warning: could not read {}: {}", path.display(), e);
                Vec::new()
            }
        };
        Ok(Store { path, transactions })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current full collection, insertion order.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validate the input, assign a fresh id, derive the month key, append
    /// and persist. On a persist failure the record stays in the in-memory
    /// list for the rest of the session; the error tells the caller the
    /// change may not survive a restart.
    pub fn add(&mut self, input: TransactionInput) -> Result<Transaction> {
        input.validate()?;
        let tx = Transaction {
            id: self.next_id(),
            kind: input.kind,
            amount: input.amount,
            category: input.category,
            description: input.description,
            date: input.date,
            month: month_key(input.date),
        };
        self.transactions.push(tx.clone());
        self.persist()?;
        Ok(tx)
    }

    /// Merge the patch into the record with the given id. Changing the date
    /// recomputes the month key. Unknown ids are a silent no-op.
    pub fn update(&mut self, id: &str, patch: TransactionPatch) -> Result<()> {
        let Some(tx) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        if let Some(kind) = patch.kind {
            tx.kind = kind;
        }
        if let Some(amount) = patch.amount {
            tx.amount = amount;
        }
        if let Some(category) = patch.category {
            tx.category = category;
        }
        if let Some(description) = patch.description {
            tx.description = description;
        }
        if let Some(date) = patch.date {
            tx.date = date;
            tx.month = month_key(date);
        }
        self.persist()
    }

    /// Remove the record with the given id. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return Ok(());
        }
        self.persist()
    }

    // Millisecond timestamp, bumped past the largest numeric id already in
    // the list so two adds in the same millisecond cannot collide.
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let max_seen = self
            .transactions
            .iter()
            .filter_map(|t| t.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        now.max(max_seen + 1).to_string()
    }

    /// Serialize the full list into the durable slot.
    pub fn persist(&self) -> Result<()> {
        let body = serde_json::to_string_pretty(&self.transactions)
            .context("Serialize transaction list")?;
        fs::write(&self.path, body)
            .with_context(|| format!("Write ledger to {}", self.path.display()))
    }
}
