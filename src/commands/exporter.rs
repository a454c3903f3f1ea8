// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::sort_for_display;
use crate::ids::IdGenerator;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;
use crate::utils::{criteria_from_args, required};
use anyhow::{Context, Result, bail};
use serde_json::json;

pub fn handle<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(tracker, sub),
        _ => Ok(()),
    }
}

fn export_transactions<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = required(sub, "format")?.trim().to_lowercase();
    let out = required(sub, "out")?;
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let criteria = criteria_from_args(sub)?;
    let rows = sort_for_display(&tracker.filtered(&criteria));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record(["id", "date", "type", "amount", "category", "account", "note"])?;
            for t in &rows {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.account.clone(),
                    t.note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = rows
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id, "date": t.date.to_string(), "type": t.r#type.to_string(),
                        "amount": t.amount.to_string(), "category": t.category,
                        "account": t.account, "note": t.note
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
