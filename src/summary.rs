// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryTotal, MonthlySummary, Transaction};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Income, expense and per-category totals for `month` (`YYYY-MM`).
///
/// A transaction belongs to the month when its ISO date starts with `month`.
/// The breakdown is sorted by amount descending; equal amounts keep the order
/// in which their category first appeared.
pub fn aggregate(transactions: &[Transaction], month: &str) -> MonthlySummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut groups: Vec<(String, Decimal)> = Vec::new();

    for t in transactions
        .iter()
        .filter(|t| t.date.to_string().starts_with(month))
    {
        if t.is_income() {
            total_income = total_income.saturating_add(t.amount);
            continue;
        }
        total_expenses = total_expenses.saturating_add(t.amount);
        match groups.iter_mut().find(|(c, _)| *c == t.category) {
            Some((_, sum)) => *sum = sum.saturating_add(t.amount),
            None => groups.push((t.category.clone(), t.amount)),
        }
    }

    let category_breakdown = if total_expenses > Decimal::ZERO {
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                // amount <= total_expenses, so the ratio is at most 1
                percentage: (amount / total_expenses).saturating_mul(HUNDRED),
                category,
                amount,
            })
            .collect()
    } else {
        Vec::new()
    };

    MonthlySummary {
        month: month.to_string(),
        total_income,
        total_expenses,
        net_balance: total_income.saturating_sub(total_expenses),
        category_breakdown,
    }
}
