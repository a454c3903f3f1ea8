// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ids::IdGenerator;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: KeyValueStore, G: IdGenerator>(
    tracker: &Tracker<S, G>,
    m: &clap::ArgMatches,
) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let cats = tracker.categories();
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
            let data = cats.into_iter().map(|c| vec![c]).collect();
            println!("{}", pretty_table(&["Category"], data));
        }
    }
    Ok(())
}
