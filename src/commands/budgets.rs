// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ids::IdGenerator;
use crate::storage::KeyValueStore;
use crate::tracker::{Tracker, current_month};
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, parse_month, parse_positive_decimal, pretty_table,
    required,
};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle<S: KeyValueStore, G: IdGenerator>(
    tracker: &mut Tracker<S, G>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(tracker, sub)?,
        Some(("clear", _)) => {
            tracker.set_budget(Decimal::ZERO);
            println!("Monthly budget cleared");
        }
        Some(("status", sub)) => status(tracker, sub)?,
        _ => {}
    }
    Ok(())
}

fn set<S: KeyValueStore, G: IdGenerator>(
    tracker: &mut Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let amount = parse_positive_decimal(required(sub, "amount")?)?;
    tracker.set_budget(amount);
    println!("Monthly budget set to {}", fmt_money(&amount));
    Ok(())
}

fn status<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    let status = tracker.budget_status(&month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &status)? {
        return Ok(());
    }
    if !status.is_set() {
        println!(
            "No monthly budget set. Spent {} in {}.",
            fmt_money(&status.spent),
            month
        );
        return Ok(());
    }
    if status.is_over_budget {
        println!(
            "Warning: monthly budget exceeded by {}",
            fmt_money(&status.overage_amount)
        );
    }
    let rows = vec![
        vec!["Month".into(), month],
        vec!["Budget".into(), fmt_money(&status.budget)],
        vec!["Spent".into(), fmt_money(&status.spent)],
        vec!["Remaining".into(), fmt_money(&status.remaining_amount)],
        vec!["Used".into(), fmt_percent(&status.percentage_used)],
    ];
    println!("{}", pretty_table(&["Budget", "Value"], rows));
    Ok(())
}
