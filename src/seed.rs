// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed demo fixtures both stores start from. There is no persistence
//! layer; every process begins here.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::{
    Budget, BudgetPeriod, Category, Device, DeviceProperties, Transaction, TxKind,
};
use crate::store::{DeviceStore, FinanceStore};

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    let expense = [
        (1, "Food & Dining", "#ef4444", "🍽️"),
        (2, "Transportation", "#3b82f6", "🚗"),
        (3, "Shopping", "#8b5cf6", "🛍️"),
        (4, "Entertainment", "#f59e0b", "🎬"),
        (5, "Bills & Utilities", "#10b981", "⚡"),
        (6, "Healthcare", "#ec4899", "🏥"),
    ];
    let income = [
        (7, "Salary", "#059669", "💼"),
        (8, "Freelance", "#0891b2", "💻"),
        (9, "Investment", "#7c3aed", "📈"),
    ];
    expense
        .iter()
        .map(|&(id, name, color, icon)| (id, name, color, icon, TxKind::Expense))
        .chain(
            income
                .iter()
                .map(|&(id, name, color, icon)| (id, name, color, icon, TxKind::Income)),
        )
        .map(|(id, name, color, icon, kind)| Category {
            id,
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
            kind,
        })
        .collect()
});

pub fn categories() -> Vec<Category> {
    CATEGORIES.clone()
}

pub fn transactions() -> Vec<Transaction> {
    let rows: [(i64, i64, &str, &str, TxKind, u32); 5] = [
        (1, 5000, "Monthly Salary", "Salary", TxKind::Income, 1),
        (2, 45, "Grocery Shopping", "Food & Dining", TxKind::Expense, 2),
        (3, 25, "Gas Station", "Transportation", TxKind::Expense, 3),
        (4, 120, "Electricity Bill", "Bills & Utilities", TxKind::Expense, 5),
        (5, 80, "Restaurant Dinner", "Food & Dining", TxKind::Expense, 7),
    ];
    rows.iter()
        .map(|&(id, amount, description, category, kind, day)| Transaction {
            id,
            amount: Decimal::from(amount),
            description: description.to_string(),
            category: category.to_string(),
            kind,
            date: date(2024, 1, day),
            created_at: stamp(2024, 1, day),
        })
        .collect()
}

pub fn budgets() -> Vec<Budget> {
    let rows: [(i64, &str, i64); 3] = [
        (1, "Food & Dining", 500),
        (2, "Transportation", 200),
        (3, "Entertainment", 150),
    ];
    rows.iter()
        .map(|&(id, category, amount)| Budget {
            id,
            category: category.to_string(),
            amount: Decimal::from(amount),
            // Recomputed the moment the store is built.
            spent: Decimal::ZERO,
            period: BudgetPeriod::Monthly,
            created_at: stamp(2024, 1, 1),
        })
        .collect()
}

pub fn devices() -> Vec<Device> {
    let now = Utc::now();
    let device = |id, name: &str, room: &str, is_active, properties| Device {
        id,
        name: name.to_string(),
        room: room.to_string(),
        is_online: true,
        is_active,
        last_updated: now,
        properties,
    };
    vec![
        device(
            1,
            "Living Room Light",
            "Living Room",
            true,
            DeviceProperties::Light {
                brightness: 80,
                color: "#ffffff".to_string(),
            },
        ),
        device(
            2,
            "Bedroom Light",
            "Bedroom",
            false,
            DeviceProperties::Light {
                brightness: 0,
                color: "#ffffff".to_string(),
            },
        ),
        device(
            3,
            "Main Thermostat",
            "Living Room",
            true,
            DeviceProperties::Thermostat {
                temperature: 22.0,
                target_temperature: 24.0,
                mode: "heating".to_string(),
            },
        ),
        device(
            4,
            "Front Door Camera",
            "Entrance",
            true,
            DeviceProperties::Security {
                is_recording: true,
                motion_detected: false,
            },
        ),
        device(
            5,
            "Front Door Lock",
            "Entrance",
            true,
            DeviceProperties::Lock { is_locked: true },
        ),
        device(
            6,
            "Kitchen Light",
            "Kitchen",
            false,
            DeviceProperties::Light {
                brightness: 0,
                color: "#ffffff".to_string(),
            },
        ),
        device(
            7,
            "Kitchen Temperature Sensor",
            "Kitchen",
            true,
            DeviceProperties::Sensor {
                value: 23.0,
                unit: "°C".to_string(),
                threshold: 25.0,
            },
        ),
    ]
}

pub fn finance_store() -> FinanceStore {
    FinanceStore::new(transactions(), budgets(), categories())
}

pub fn device_store() -> DeviceStore {
    DeviceStore::new(devices())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date")
}

fn stamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(0, 0, 0)
        .expect("static seed time")
        .and_utc()
}
