// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::FinanceStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        Some(("recent", sub)) => recent(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = store.financial_summary();
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Total income".to_string(), fmt_money(&s.total_income)],
            vec!["Total expenses".to_string(), fmt_money(&s.total_expenses)],
            vec!["Net income".to_string(), fmt_money(&s.net_income)],
            vec!["Monthly income".to_string(), fmt_money(&s.monthly_income)],
            vec!["Monthly expenses".to_string(), fmt_money(&s.monthly_expenses)],
            vec![
                "Savings rate".to_string(),
                format!("{:.1}%", s.savings_rate.round_dp(1)),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

fn monthly(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.monthly_data();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|m| {
                vec![
                    m.month.to_string(),
                    fmt_money(&m.income),
                    fmt_money(&m.expenses),
                    fmt_money(&m.net),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}

fn by_category(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let agg = store.expenses_by_category();
    if !maybe_print_json(json_flag, jsonl_flag, &agg)? {
        let mut items: Vec<_> = agg.into_iter().collect();
        items.sort_by(|a, b| b.1.cmp(&a.1));
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|(cat, amt)| vec![cat.clone(), fmt_money(amt)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn recent(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.recent_transactions();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    t.kind.to_string(),
                    fmt_money(&t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Type", "Amount"], rows)
        );
    }
    Ok(())
}
