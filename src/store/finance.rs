// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::models::{
    Budget, BudgetPatch, Category, FinancialSummary, MonthlyData, NewBudget, NewTransaction,
    Transaction, TransactionPatch, TxKind,
};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The closed set of mutations a consumer may request.
#[derive(Debug, Clone)]
pub enum FinanceAction {
    AddTransaction(NewTransaction),
    UpdateTransaction { id: i64, patch: TransactionPatch },
    DeleteTransaction { id: i64 },
    AddBudget(NewBudget),
    UpdateBudget { id: i64, patch: BudgetPatch },
    DeleteBudget { id: i64 },
}

/// In-memory store for transactions and budgets. All mutation goes through
/// [`FinanceStore::dispatch`]; reads are snapshots or derived views computed
/// from the current collections. Missing-id updates and deletes degrade to
/// silent no-ops: callers are UI controls that only target ids they just
/// rendered.
pub struct FinanceStore {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    categories: Vec<Category>,
    next_id: i64,
}

impl FinanceStore {
    pub fn new(
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        categories: Vec<Category>,
    ) -> Self {
        let max_id = transactions
            .iter()
            .map(|t| t.id)
            .chain(budgets.iter().map(|b| b.id))
            .max()
            .unwrap_or(0);
        let mut store = Self {
            transactions,
            budgets,
            categories,
            next_id: max_id + 1,
        };
        // Seed budgets may carry stale spent values; derive from day one.
        store.recompute_spent();
        store
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn dispatch(&mut self, action: FinanceAction) {
        match action {
            FinanceAction::AddTransaction(new) => {
                let id = self.take_id();
                debug!("add transaction {} ({} {})", id, new.kind, new.amount);
                self.transactions.push(Transaction {
                    id,
                    amount: new.amount,
                    description: new.description,
                    category: new.category,
                    kind: new.kind,
                    date: new.date,
                    created_at: Utc::now(),
                });
            }
            FinanceAction::UpdateTransaction { id, patch } => {
                match self.transactions.iter_mut().find(|t| t.id == id) {
                    Some(t) => {
                        if let Some(amount) = patch.amount {
                            t.amount = amount;
                        }
                        if let Some(description) = patch.description {
                            t.description = description;
                        }
                        if let Some(category) = patch.category {
                            t.category = category;
                        }
                        if let Some(kind) = patch.kind {
                            t.kind = kind;
                        }
                        if let Some(date) = patch.date {
                            t.date = date;
                        }
                    }
                    None => debug!("update for unknown transaction {}, ignoring", id),
                }
            }
            FinanceAction::DeleteTransaction { id } => {
                self.transactions.retain(|t| t.id != id);
            }
            FinanceAction::AddBudget(new) => {
                let id = self.take_id();
                debug!("add budget {} for '{}'", id, new.category);
                self.budgets.push(Budget {
                    id,
                    category: new.category,
                    amount: new.amount,
                    spent: Decimal::ZERO,
                    period: new.period,
                    created_at: Utc::now(),
                });
            }
            FinanceAction::UpdateBudget { id, patch } => {
                match self.budgets.iter_mut().find(|b| b.id == id) {
                    Some(b) => {
                        if let Some(category) = patch.category {
                            b.category = category;
                        }
                        if let Some(amount) = patch.amount {
                            b.amount = amount;
                        }
                        if let Some(period) = patch.period {
                            b.period = period;
                        }
                    }
                    None => debug!("update for unknown budget {}, ignoring", id),
                }
            }
            FinanceAction::DeleteBudget { id } => {
                self.budgets.retain(|b| b.id != id);
            }
        }
        // Total and unconditional: every budget's spent is replaced after
        // every dispatch, never adjusted incrementally.
        self.recompute_spent();
    }

    /// All-time expense rollup per budget category. No date window is
    /// applied regardless of the budget's period.
    fn recompute_spent(&mut self) {
        for budget in &mut self.budgets {
            budget.spent = self
                .transactions
                .iter()
                .filter(|t| t.kind == TxKind::Expense && t.category == budget.category)
                .map(|t| t.amount)
                .sum();
        }
    }

    pub fn financial_summary(&self) -> FinancialSummary {
        let total_income = self.sum_where(|t| t.kind == TxKind::Income);
        let total_expenses = self.sum_where(|t| t.kind == TxKind::Expense);

        let today = Utc::now().date_naive();
        let in_current_month =
            |t: &Transaction| t.date.month() == today.month() && t.date.year() == today.year();
        let monthly_income = self.sum_where(|t| t.kind == TxKind::Income && in_current_month(t));
        let monthly_expenses = self.sum_where(|t| t.kind == TxKind::Expense && in_current_month(t));

        let savings_rate = if monthly_income > Decimal::ZERO {
            (monthly_income - monthly_expenses) / monthly_income * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        FinancialSummary {
            total_income,
            total_expenses,
            net_income: total_income - total_expenses,
            monthly_income,
            monthly_expenses,
            savings_rate,
        }
    }

    /// Twelve fixed entries, Jan through Dec of the current year.
    pub fn monthly_data(&self) -> Vec<MonthlyData> {
        let year = Utc::now().date_naive().year();
        MONTH_LABELS
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let month = idx as u32 + 1;
                let in_month =
                    |t: &Transaction| t.date.month() == month && t.date.year() == year;
                let income = self.sum_where(|t| t.kind == TxKind::Income && in_month(t));
                let expenses = self.sum_where(|t| t.kind == TxKind::Expense && in_month(t));
                MonthlyData {
                    month: label,
                    income,
                    expenses,
                    net: income - expenses,
                }
            })
            .collect()
    }

    pub fn expenses_by_category(&self) -> BTreeMap<String, Decimal> {
        let mut agg = BTreeMap::new();
        for t in self.transactions.iter().filter(|t| t.kind == TxKind::Expense) {
            *agg.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
        }
        agg
    }

    /// The five most recent transactions by date, descending. The sort is
    /// stable so same-day entries keep their original relative order.
    pub fn recent_transactions(&self) -> Vec<Transaction> {
        let mut recent = self.transactions.clone();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(5);
        recent
    }

    fn sum_where(&self, pred: impl Fn(&Transaction) -> bool) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| pred(t))
            .map(|t| t.amount)
            .sum()
    }

    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
