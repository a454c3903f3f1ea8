// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::storage::{BUDGET_KEY, KeyValueStore, TRANSACTIONS_KEY};
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Problems found in the raw persisted blobs, as (issue, detail) pairs.
pub fn diagnose<S: KeyValueStore>(store: &S) -> Result<Vec<(String, String)>> {
    let mut issues = Vec::new();

    if let Some(raw) = store.load(TRANSACTIONS_KEY)? {
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(list) => {
                let mut seen = HashSet::new();
                for t in &list {
                    if !seen.insert(t.id.as_str()) {
                        issues.push(("duplicate_id".into(), t.id.clone()));
                    }
                    if t.amount <= Decimal::ZERO {
                        issues.push(("non_positive_amount".into(), format!("{} {}", t.id, t.amount)));
                    }
                    if t.category.trim().is_empty() {
                        issues.push(("empty_category".into(), t.id.clone()));
                    }
                    if t.account.trim().is_empty() {
                        issues.push(("empty_account".into(), t.id.clone()));
                    }
                }
            }
            Err(err) => issues.push(("transactions_malformed".into(), err.to_string())),
        }
    }

    if let Some(raw) = store.load(BUDGET_KEY)? {
        match raw.trim().parse::<Decimal>() {
            Ok(v) if v < Decimal::ZERO => {
                issues.push(("budget_negative".into(), v.to_string()));
            }
            Ok(_) => {}
            Err(err) => issues.push(("budget_malformed".into(), format!("'{}': {}", raw, err))),
        }
    }

    Ok(issues)
}

pub fn handle<S: KeyValueStore>(store: &S) -> Result<()> {
    let issues = diagnose(store)?;
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues.into_iter().map(|(i, d)| vec![i, d]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
