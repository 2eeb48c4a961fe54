// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::bail;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl std::str::FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => bail!("Invalid transaction type '{}', expected income|expense", other),
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    pub description: String,
    /// Loose string match against `Category::name`; nothing enforces the reference.
    pub category: String,
    pub kind: TxKind,
    /// User-assigned date, may lie in the past or future.
    pub date: NaiveDate,
    /// Assigned at insertion, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a transaction; the store assigns id and created_at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub kind: TxKind,
    pub date: NaiveDate,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TxKind>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}

impl std::str::FromStr for BudgetPeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            other => bail!("Invalid budget period '{}', expected monthly|yearly", other),
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetPeriod::Monthly => write!(f, "monthly"),
            BudgetPeriod::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    /// Spending ceiling for the category.
    pub amount: Decimal,
    /// Derived rollup, never set directly by callers.
    pub spent: Decimal,
    /// Display-only; the spent rollup applies no date window.
    pub period: BudgetPeriod,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub period: Option<BudgetPeriod>,
}

/// Static reference data; not mutable through any store action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub kind: TxKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_income: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    /// Percentage; zero when the current month has no income.
    pub savings_rate: Decimal,
}

/// One entry per calendar month of the current year.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyData {
    pub month: &'static str,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}
