// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Housing",
    "Transportation",
    "Food & Dining",
    "Entertainment",
    "Shopping",
    "Healthcare",
    "Utilities",
    "Education",
    "Travel",
    "Other",
];

pub const INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Gift",
    "Other",
];

/// Neutral fallback for categories without a chart color of their own.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6B7280";

static CATEGORY_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Housing", "#3B82F6"),
        ("Transportation", "#10B981"),
        ("Food & Dining", "#F59E0B"),
        ("Entertainment", "#8B5CF6"),
        ("Shopping", "#EF4444"),
        ("Healthcare", "#06B6D4"),
        ("Utilities", "#84CC16"),
        ("Education", "#F97316"),
        ("Travel", "#EC4899"),
        ("Other", "#6B7280"),
        ("Salary", "#059669"),
        ("Freelance", "#0891B2"),
        ("Investment", "#7C3AED"),
        ("Business", "#DC2626"),
        ("Gift", "#DB2777"),
    ])
});

pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .get(category)
        .copied()
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => &INCOME_CATEGORIES,
        TransactionKind::Expense => &EXPENSE_CATEGORIES,
    }
}

pub fn is_known_category(kind: TransactionKind, category: &str) -> bool {
    categories_for(kind).contains(&category)
}
