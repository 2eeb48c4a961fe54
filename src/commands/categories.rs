// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::FinanceStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let json_flag = sub.get_flag("json");
        let jsonl_flag = sub.get_flag("jsonl");
        if !maybe_print_json(json_flag, jsonl_flag, &store.categories())? {
            let rows: Vec<Vec<String>> = store
                .categories()
                .iter()
                .map(|c| {
                    vec![
                        c.icon.clone(),
                        c.name.clone(),
                        c.kind.to_string(),
                        c.color.clone(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["", "Category", "Type", "Color"], rows));
        }
    }
    Ok(())
}
