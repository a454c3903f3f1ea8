// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FilterCriteria, Transaction};
use std::collections::BTreeSet;

/// Returns the transactions matching every constraint in `criteria`, in
/// their original relative order.
pub fn filter(transactions: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    let search = criteria.search.to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            (search.is_empty()
                || t.category.to_lowercase().contains(&search)
                || t.account.to_lowercase().contains(&search))
                && (criteria.category.is_empty() || t.category == criteria.category)
                && criteria.start_date.is_none_or(|start| t.date >= start)
                && criteria.end_date.is_none_or(|end| t.date <= end)
        })
        .cloned()
        .collect()
}

/// Distinct categories across the whole collection, ascending.
pub fn categories(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Newest first; same-day entries keep insertion order.
pub fn sort_for_display(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
