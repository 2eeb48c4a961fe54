// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use hearth::{cli, commands, seed};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // Both stores start from the fixed demo fixtures; each invocation is a
    // fresh process, there is no persistence layer.
    let mut finances = seed::finance_store();
    let mut devices = seed::device_store();

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut finances, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut finances, sub)?,
        Some(("category", sub)) => commands::categories::handle(&finances, sub)?,
        Some(("report", sub)) => commands::reports::handle(&finances, sub)?,
        Some(("device", sub)) => commands::devices::handle(&mut devices, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
