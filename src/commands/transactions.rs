// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::sort_for_display;
use crate::ids::IdGenerator;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;
use crate::utils::{
    criteria_from_args, fmt_money, maybe_print_json, parse_date, parse_positive_decimal,
    pretty_table, required,
};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;

pub fn handle<S: KeyValueStore, G: IdGenerator>(
    tracker: &mut Tracker<S, G>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, sub)?,
        Some(("rm", sub)) => remove(tracker, sub)?,
        Some(("list", sub)) => list(tracker, sub)?,
        _ => {}
    }
    Ok(())
}

/// Reads `tx add` arguments into a validated transaction input.
pub fn new_transaction_from_args(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let amount = parse_positive_decimal(required(sub, "amount")?)?;
    let r#type = match sub.get_one::<String>("type") {
        Some(s) => s.parse::<TransactionType>()?,
        None => TransactionType::Expense,
    };
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let input = NewTransaction {
        date,
        amount,
        r#type,
        category: required(sub, "category")?.trim().to_string(),
        account: required(sub, "account")?.trim().to_string(),
        note: sub
            .get_one::<String>("note")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string()),
    };
    input.validate()?;
    Ok(input)
}

fn add<S: KeyValueStore, G: IdGenerator>(
    tracker: &mut Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let input = new_transaction_from_args(sub)?;
    let tx = tracker.add_transaction(input);
    println!(
        "Recorded {} {} on {} in '{}' (acct: {}) [{}]",
        tx.r#type, tx.amount, tx.date, tx.category, tx.account, tx.id
    );
    Ok(())
}

fn remove<S: KeyValueStore, G: IdGenerator>(
    tracker: &mut Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = required(sub, "id")?.trim();
    if tracker.remove_transaction(id) {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub amount: String,
    pub category: String,
    pub account: String,
    pub note: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            amount: fmt_money(&t.amount),
            category: t.category.clone(),
            account: t.account.clone(),
            note: t.note.clone().unwrap_or_default(),
        }
    }
}

/// Filtered, newest-first rows for `tx list`, honoring `--limit`.
pub fn query_rows<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let criteria = criteria_from_args(sub)?;
    let sorted = sort_for_display(&tracker.filtered(&criteria));
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(sorted.iter().take(limit).map(TransactionRow::from).collect())
}

fn list<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(tracker, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions yet. Add one with `tallybook tx add`.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .into_iter()
        .map(|r| {
            let signed = if r.r#type == "income" {
                format!("+{}", r.amount)
            } else {
                format!("-{}", r.amount)
            };
            vec![r.date, r.category, r.account, signed, r.note, r.id]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Date", "Category", "Account", "Amount", "Note", "ID"],
            rows
        )
    );
    Ok(())
}
