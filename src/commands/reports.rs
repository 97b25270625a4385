// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    expense_category_breakdown, month_summary, monthly_trends, recent_transactions,
};
use crate::store::Store;
use crate::utils::{maybe_print_json, month_key, parse_month, pretty_table};
use anyhow::Result;
use chrono::Datelike;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("trends", sub)) => trends(store, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(store, sub)?,
        Some(("recent", sub)) => recent(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn month_arg(sub: &clap::ArgMatches) -> Result<String> {
    match sub.get_one::<String>("month") {
        Some(s) => parse_month(s),
        None => Ok(month_key(chrono::Local::now().date_naive())),
    }
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_arg(sub)?;
    let totals = month_summary(store.list(), &month);
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows = vec![vec![
            month,
            format!("{:.2}", totals.income),
            format!("{:.2}", totals.expenses),
            format!("{:.2}", totals.savings),
        ]];
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Savings"], rows)
        );
    }
    Ok(())
}

fn trends(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = chrono::Local::now().year();
    let data = monthly_trends(store.list(), year);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|d| {
                vec![
                    d.month.clone(),
                    format!("{:.2}", d.income),
                    format!("{:.2}", d.expenses),
                    format!("{:.2}", d.savings),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Savings"], rows)
        );
    }
    Ok(())
}

fn spend_by_category(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = month_arg(sub)?;
    let data = expense_category_breakdown(store.list(), &month);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| {
                vec![
                    c.category.clone(),
                    format!("{:.2}", c.amount),
                    c.color.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Color"], rows));
    }
    Ok(())
}

fn recent(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(5);
    let data = recent_transactions(store.list(), limit);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    format!("{:.2}", t.amount),
                    t.category.clone(),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Amount", "Category", "Description"], rows)
        );
    }
    Ok(())
}
