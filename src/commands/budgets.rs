// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BudgetPatch, BudgetPeriod, NewBudget};
use crate::store::{FinanceAction, FinanceStore};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("rm", sub)) => rm(store, sub),
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let period: BudgetPeriod = sub.get_one::<String>("period").unwrap().parse()?;
    store.dispatch(FinanceAction::AddBudget(NewBudget {
        category: category.clone(),
        amount,
        period,
    }));
    println!("Budget set for '{}' = {} ({})", category, fmt_money(&amount), period);
    Ok(())
}

fn update(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = BudgetPatch {
        category: sub.get_one::<String>("category").cloned(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        period: sub
            .get_one::<String>("period")
            .map(|s| s.parse())
            .transpose()?,
    };
    store.dispatch(FinanceAction::UpdateBudget { id, patch });
    println!("Updated budget {}", id);
    Ok(())
}

fn rm(store: &mut FinanceStore, sub: &clap::ArgMatches) {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.dispatch(FinanceAction::DeleteBudget { id });
    println!("Deleted budget {}", id);
}

#[derive(Serialize)]
struct BudgetRow {
    id: i64,
    category: String,
    period: String,
    amount: String,
    spent: String,
}

fn list(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<BudgetRow> = store
        .budgets()
        .iter()
        .map(|b| BudgetRow {
            id: b.id,
            category: b.category.clone(),
            period: b.period.to_string(),
            amount: fmt_money(&b.amount),
            spent: fmt_money(&b.spent),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.category.clone(),
                    r.period.clone(),
                    r.amount.clone(),
                    r.spent.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Category", "Period", "Budget", "Spent"], rows)
        );
    }
    Ok(())
}
