// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use hearth::commands::{budgets, devices, transactions};
use hearth::{cli, seed};

#[test]
fn tx_add_reaches_the_store() {
    let mut store = seed::finance_store();
    let matches = cli::build_cli().get_matches_from([
        "hearth",
        "tx",
        "add",
        "--date",
        "2026-08-15",
        "--amount",
        "42.50",
        "--description",
        "Coffee beans",
        "--category",
        "Food & Dining",
        "--type",
        "expense",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(&mut store, tx_m).unwrap();
    } else {
        panic!("no tx subcommand");
    }
    let added = store
        .transactions()
        .iter()
        .find(|t| t.description == "Coffee beans")
        .expect("transaction added");
    assert_eq!(added.amount, "42.50".parse::<Decimal>().unwrap());
    // The food budget sees the new expense immediately.
    assert_eq!(
        store.budgets()[0].spent,
        "167.50".parse::<Decimal>().unwrap()
    );
}

#[test]
fn tx_add_rejects_bad_amount() {
    let mut store = seed::finance_store();
    let matches = cli::build_cli().get_matches_from([
        "hearth", "tx", "add", "--date", "2026-08-15", "--amount", "banana", "--description",
        "x", "--category", "Shopping", "--type", "expense",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        assert!(transactions::handle(&mut store, tx_m).is_err());
    } else {
        panic!("no tx subcommand");
    }
    assert_eq!(store.transactions().len(), 5);
}

#[test]
fn tx_list_limit_respected() {
    let store = seed::finance_store();
    let matches =
        cli::build_cli().get_matches_from(["hearth", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let limit = list_m.get_one::<usize>("limit").copied();
            let rows = transactions::query_rows(&store, limit);
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2024-01-07");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn budget_add_rejects_bad_period() {
    let mut store = seed::finance_store();
    let matches = cli::build_cli().get_matches_from([
        "hearth", "budget", "add", "--category", "Shopping", "--amount", "100", "--period",
        "weekly",
    ]);
    if let Some(("budget", b_m)) = matches.subcommand() {
        assert!(budgets::handle(&mut store, b_m).is_err());
    } else {
        panic!("no budget subcommand");
    }
    assert_eq!(store.budgets().len(), 3);
}

#[test]
fn device_toggle_reaches_the_store() {
    let mut store = seed::device_store();
    let matches = cli::build_cli().get_matches_from(["hearth", "device", "toggle", "2"]);
    if let Some(("device", d_m)) = matches.subcommand() {
        devices::handle(&mut store, d_m).unwrap();
    } else {
        panic!("no device subcommand");
    }
    let d = store.devices().into_iter().find(|d| d.id == 2).unwrap();
    assert!(d.is_active);
}

#[test]
fn device_brightness_is_range_checked_at_the_boundary() {
    // 0-100 is enforced by the control layer, not the store.
    let err = cli::build_cli().try_get_matches_from([
        "hearth",
        "device",
        "brightness",
        "2",
        "150",
    ]);
    assert!(err.is_err());
}

#[test]
fn device_list_room_filter() {
    let mut store = seed::device_store();
    let matches = cli::build_cli().get_matches_from([
        "hearth", "device", "list", "--room", "Kitchen",
    ]);
    if let Some(("device", d_m)) = matches.subcommand() {
        devices::handle(&mut store, d_m).unwrap();
    } else {
        panic!("no device subcommand");
    }
    assert_eq!(store.selected_room(), "Kitchen");
    assert_eq!(store.filtered_devices().len(), 2);
}
