// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .help("Month YYYY-MM (defaults to the current month)")
}

fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_parser(value_parser!(usize))
        .help("Maximum rows to show")
}

pub fn build_cli() -> Command {
    Command::new("budgetbuddy")
        .about("Monthly needs/wants/savings budgeting, expenses, goals and trends")
        .version(clap::crate_version!())
        .arg(
            Arg::new("data_dir")
                .long("data-dir")
                .global(true)
                .help("Directory holding the budgetbuddy database, backups and exports"),
        )
        .subcommand(Command::new("init").about("Create the data directory and database"))
        .subcommand(
            Command::new("budget")
                .about("Set and inspect the monthly allocation")
                .subcommand(
                    Command::new("set")
                        .about("Set this month's budget (50/30/20 unless overridden)")
                        .arg(Arg::new("income").long("income").required(true))
                        .arg(Arg::new("needs").long("needs").default_value("50"))
                        .arg(Arg::new("wants").long("wants").default_value("30"))
                        .arg(Arg::new("savings").long("savings").default_value("20")),
                )
                .subcommand(json_args(Command::new("show").about("Show the current budget")))
                .subcommand(json_args(
                    Command::new("progress")
                        .about("Spending against needs/wants/total")
                        .arg(month_arg()),
                )),
        )
        .subcommand(
            Command::new("expense")
                .about("Record and manage expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today")),
                )
                .subcommand(json_args(
                    Command::new("list").arg(month_arg()).arg(limit_arg()),
                ))
                .subcommand(
                    Command::new("edit")
                        .arg(
                            Arg::new("index")
                                .long("index")
                                .required(true)
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("index")
                            .long("index")
                            .required(true)
                            .value_parser(value_parser!(usize)),
                    ),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Record income")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("salary")
                                .help("salary, part_time, bonus or other"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(json_args(
                    Command::new("list").arg(month_arg()).arg(limit_arg()),
                ))
                .subcommand(json_args(Command::new("summary").arg(month_arg()))),
        )
        .subcommand(
            Command::new("category")
                .about("Manage category metadata")
                .subcommand(json_args(Command::new("list")))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("color").long("color").default_value("#95a5a6"))
                        .arg(Arg::new("icon").long("icon").default_value("📦"))
                        .arg(Arg::new("type").long("type").default_value("wants")),
                )
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("color").long("color"))
                        .arg(Arg::new("icon").long("icon"))
                        .arg(Arg::new("type").long("type")),
                )
                .subcommand(
                    Command::new("rm").arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("deadline").long("deadline"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("contribute")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_args(Command::new("status"))),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries, suggestions and predictions")
                .subcommand(json_args(Command::new("monthly").arg(month_arg())))
                .subcommand(json_args(
                    Command::new("weekly")
                        .arg(Arg::new("start").long("start").help("Week start YYYY-MM-DD")),
                ))
                .subcommand(json_args(Command::new("yearly").arg(Arg::new("year").long("year"))))
                .subcommand(json_args(Command::new("suggest").arg(month_arg())))
                .subcommand(json_args(Command::new("predict")))
                .subcommand(json_args(Command::new("stats").arg(month_arg())))
                .subcommand(json_args(
                    Command::new("chart")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("category")
                                .value_parser(["category", "trend", "budget"]),
                        )
                        .arg(month_arg())
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .default_value("6")
                                .value_parser(value_parser!(u32)),
                        ),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data as JSON or CSV")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("json|csv"),
                )
                .arg(Arg::new("out").long("out").help("Target directory")),
        )
        .subcommand(
            Command::new("import")
                .about("Replace all data with a JSON export")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("backup")
                .about("Snapshot and restore all data")
                .subcommand(Command::new("create").arg(Arg::new("dir").long("dir")))
                .subcommand(Command::new("list").arg(Arg::new("dir").long("dir")))
                .subcommand(
                    Command::new("restore").arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check data for inconsistencies"))
}
