// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations over the transaction list. Every view is recomputed
//! from the full list on demand; nothing here mutates or caches.

use crate::categories::category_color;
use crate::models::{CategorySpend, MonthlyData, MonthlySummary, Transaction, TransactionKind};
use crate::utils::month_key;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Income, expenses and savings for one YYYY-MM bucket.
pub fn month_summary(transactions: &[Transaction], month: &str) -> MonthlySummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions.iter().filter(|t| t.month == month) {
        match t.kind {
            TransactionKind::Income => income += t.amount,
            TransactionKind::Expense => expenses += t.amount,
        }
    }
    MonthlySummary {
        income,
        expenses,
        savings: income - expenses,
    }
}

/// The dashboard headline numbers: totals for the month `today` falls in.
pub fn current_month_summary(transactions: &[Transaction], today: NaiveDate) -> MonthlySummary {
    month_summary(transactions, &month_key(today))
}

/// January through December of `year`, one entry per month in calendar
/// order. Months without transactions yield all-zero entries, so the
/// series is always 12 long and gap-free.
pub fn monthly_trends(transactions: &[Transaction], year: i32) -> Vec<MonthlyData> {
    (1..=12)
        .map(|m| {
            let month = format!("{:04}-{:02}", year, m);
            let totals = month_summary(transactions, &month);
            MonthlyData {
                month,
                income: totals.income,
                expenses: totals.expenses,
                savings: totals.savings,
            }
        })
        .collect()
}

/// Expense totals per category for one month, largest first. Equal amounts
/// order alphabetically by category so the output is reproducible.
pub fn expense_category_breakdown(transactions: &[Transaction], month: &str) -> Vec<CategorySpend> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.month == month)
    {
        *totals.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut items: Vec<(&str, Decimal)> = totals.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    items
        .into_iter()
        .map(|(category, amount)| CategorySpend {
            category: category.to_string(),
            amount,
            color: category_color(category).to_string(),
        })
        .collect()
}

/// The `limit` most recent transactions, newest date first. Same-day
/// records order by id descending (ids are millisecond timestamps, so this
/// is newest-entered first).
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| id_sort_key(&b.id).cmp(&id_sort_key(&a.id)))
    });
    sorted.truncate(limit);
    sorted
}

fn id_sort_key(id: &str) -> (i64, &str) {
    (id.parse().unwrap_or(0), id)
}
