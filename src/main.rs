// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tallybook::{cli, commands, config::Config, db, ids::UuidGenerator, tracker::Tracker, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::from_env_and_args(&matches)?;
    utils::init_tracing(&config.log_filter);

    let store = db::open_or_init(&config.db_path)?;
    let mut tracker = Tracker::open(&store, UuidGenerator);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", config.db_path.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut tracker, sub)?,
        Some(("category", sub)) => commands::categories::handle(&tracker, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut tracker, sub)?,
        Some(("report", sub)) => commands::reports::handle(&tracker, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&tracker, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
