// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_description, crate_version, value_parser};

pub fn build_cli() -> Command {
    Command::new("hearth")
        .about(crate_description!())
        .version(crate_version!())
        .subcommand(tx_cmd())
        .subcommand(budget_cmd())
        .subcommand(category_cmd())
        .subcommand(report_cmd())
        .subcommand(device_cmd())
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Manage transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("description").long("description").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("income or expense"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update fields of a transaction")
                .arg(id_arg())
                .arg(Arg::new("date").long("date"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("description").long("description"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("type").long("type")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction")
                .arg(id_arg()),
        )
        .subcommand(json_flags(
            Command::new("list").about("List transactions").arg(
                Arg::new("limit")
                    .long("limit")
                    .value_parser(value_parser!(usize)),
            ),
        ))
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Manage budgets")
        .subcommand(
            Command::new("add")
                .about("Create a budget for a category")
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("period")
                        .long("period")
                        .default_value("monthly")
                        .help("monthly or yearly"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update fields of a budget")
                .arg(id_arg())
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("period").long("period")),
        )
        .subcommand(Command::new("rm").about("Delete a budget").arg(id_arg()))
        .subcommand(json_flags(
            Command::new("list").about("List budgets with derived spend"),
        ))
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Reference categories")
        .subcommand(json_flags(Command::new("list").about("List categories")))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Derived financial views")
        .subcommand(json_flags(
            Command::new("summary").about("Income, expenses, net and savings rate"),
        ))
        .subcommand(json_flags(
            Command::new("monthly").about("Jan-Dec series for the current year"),
        ))
        .subcommand(json_flags(
            Command::new("by-category").about("Expense rollup per category"),
        ))
        .subcommand(json_flags(
            Command::new("recent").about("Five most recent transactions"),
        ))
}

fn device_cmd() -> Command {
    Command::new("device")
        .about("Smart-home device panel")
        .subcommand(json_flags(
            Command::new("list")
                .about("List devices")
                .arg(Arg::new("room").long("room").help("Filter to one room")),
        ))
        .subcommand(
            Command::new("toggle")
                .about("Toggle a device on or off")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("brightness")
                .about("Set a light's brightness (0-100)")
                .arg(id_arg())
                .arg(
                    Arg::new("value")
                        .required(true)
                        .value_parser(value_parser!(u8).range(0..=100)),
                ),
        )
        .subcommand(
            Command::new("temperature")
                .about("Set a thermostat's target temperature")
                .arg(id_arg())
                .arg(
                    Arg::new("value")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("lock")
                .about("Toggle a door lock")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("record")
                .about("Toggle a camera's recording state")
                .arg(id_arg()),
        )
        .subcommand(json_flags(
            Command::new("rooms").about("Room aggregates"),
        ))
        .subcommand(
            Command::new("watch")
                .about("Run the telemetry drift task and re-render the panel")
                .arg(
                    Arg::new("ticks")
                        .long("ticks")
                        .default_value("3")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .default_value("5")
                        .value_parser(value_parser!(u64))
                        .help("Drift period in seconds"),
                ),
        )
}
