// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as one JSON object per line")
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Personal income/expense tracking with monthly analytics")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the data file and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income|expense"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (defaults to today)"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(Arg::new("type").long("type").help("income|expense"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category").about("Category vocabulary").subcommand(
                Command::new("list")
                    .about("List suggested categories and their chart colors")
                    .arg(Arg::new("type").long("type").help("income|expense")),
            ),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard views derived from the ledger")
                .subcommand(
                    Command::new("summary")
                        .about("Income, expenses and savings for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("YYYY-MM (defaults to the current month)"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("trends")
                        .about("Jan-Dec totals for the current year")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("spend-by-category")
                        .about("Expense totals per category for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("YYYY-MM (defaults to the current month)"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("recent")
                        .about("Most recent transactions")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("export").about("Export the ledger").subcommand(
                Command::new("transactions")
                    .about("Write all transactions to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Audit the data file for invariant violations"))
}
