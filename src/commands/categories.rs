// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{categories_for, category_color};
use crate::models::TransactionKind;
use crate::utils::{parse_kind, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let kinds: Vec<TransactionKind> = match sub.get_one::<String>("type") {
                Some(s) => vec![parse_kind(s)?],
                None => vec![TransactionKind::Expense, TransactionKind::Income],
            };
            let mut data = Vec::new();
            for kind in kinds {
                for cat in categories_for(kind) {
                    data.push(vec![
                        kind.as_str().to_string(),
                        cat.to_string(),
                        category_color(cat).to_string(),
                    ]);
                }
            }
            println!("{}", pretty_table(&["Type", "Category", "Color"], data));
        }
        _ => {}
    }
    Ok(())
}
