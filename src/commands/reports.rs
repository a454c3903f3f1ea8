// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ids::IdGenerator;
use crate::storage::KeyValueStore;
use crate::tracker::{Tracker, current_month};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;

pub fn handle<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    m: &clap::ArgMatches,
) -> Result<()> {
    if let Some(("summary", sub)) = m.subcommand() {
        summary(tracker, sub)?;
    }
    Ok(())
}

fn summary<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    let summary = tracker.monthly_summary(&month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        return Ok(());
    }

    let totals = vec![
        vec!["Income".into(), fmt_money(&summary.total_income)],
        vec!["Expenses".into(), fmt_money(&summary.total_expenses)],
        vec!["Net balance".into(), fmt_money(&summary.net_balance)],
    ];
    println!("{}", pretty_table(&[month.as_str(), "Total"], totals));

    if summary.category_breakdown.is_empty() {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = summary
        .category_breakdown
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.amount),
                fmt_percent(&c.percentage),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    Ok(())
}
