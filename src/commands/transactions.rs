// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, Transaction, TransactionPatch, TxKind};
use crate::store::{FinanceAction, FinanceStore};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
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
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;

    store.dispatch(FinanceAction::AddTransaction(NewTransaction {
        amount,
        description: description.clone(),
        category,
        kind,
        date,
    }));
    println!("Recorded {} {} '{}' on {}", kind, fmt_money(&amount), description, date);
    Ok(())
}

fn update(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = TransactionPatch {
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        description: sub.get_one::<String>("description").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        kind: sub
            .get_one::<String>("type")
            .map(|s| s.parse())
            .transpose()?,
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
    };
    store.dispatch(FinanceAction::UpdateTransaction { id, patch });
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(store: &mut FinanceStore, sub: &clap::ArgMatches) {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.dispatch(FinanceAction::DeleteTransaction { id });
    println!("Deleted transaction {}", id);
}

fn list(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub.get_one::<usize>("limit").copied());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Category", "Type", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
}

pub fn query_rows(store: &FinanceStore, limit: Option<usize>) -> Vec<TransactionRow> {
    let mut txs: Vec<Transaction> = store.transactions().to_vec();
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        txs.truncate(limit);
    }
    txs.iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            description: t.description.clone(),
            category: t.category.clone(),
            kind: t.kind.to_string(),
            amount: fmt_money(&t.amount),
        })
        .collect()
}
