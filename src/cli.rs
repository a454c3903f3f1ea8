// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("search")
            .long("search")
            .short('s')
            .help("Case-insensitive match on category or account"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .short('c')
            .help("Exact category"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Earliest date, inclusive"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Latest date, inclusive"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .short('m')
        .value_name("YYYY-MM")
        .help("Reference month (defaults to the current month)")
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track income and expenses, summarize months, watch a budget")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("SQLite file to use (overrides TALLYBOOK_DB)"),
        )
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record, remove and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .required(true),
                        )
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .default_value("expense")
                                .help("income|expense"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .short('d')
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("note").long("note").short('n')),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(json_flags(filter_args(
                    Command::new("list").about("List transactions, newest first").arg(
                        Arg::new("limit")
                            .long("limit")
                            .short('l')
                            .value_parser(value_parser!(usize)),
                    ),
                ))),
        )
        .subcommand(
            Command::new("category")
                .about("Categories in use")
                .subcommand(json_flags(
                    Command::new("list").about("Distinct categories, sorted"),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly spending budget")
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly budget")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(Command::new("clear").about("Remove the monthly budget"))
                .subcommand(json_flags(
                    Command::new("status")
                        .about("Budget usage for a month")
                        .arg(month_arg()),
                )),
        )
        .subcommand(
            Command::new("report").about("Aggregated views").subcommand(json_flags(
                Command::new("summary")
                    .about("Income, expenses and category breakdown for a month")
                    .arg(month_arg()),
            )),
        )
        .subcommand(
            Command::new("export")
                .about("Write transactions to a file")
                .subcommand(filter_args(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .short('f')
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").short('o').required(true)),
                )),
        )
        .subcommand(Command::new("doctor").about("Check persisted data for problems"))
}
