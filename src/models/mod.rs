// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod devices;
pub mod finance;

pub use devices::{ALL_ROOMS, Device, DeviceKind, DeviceProperties, Room};
pub use finance::{
    Budget, BudgetPatch, BudgetPeriod, Category, FinancialSummary, MonthlyData, NewBudget,
    NewTransaction, Transaction, TransactionPatch, TxKind,
};
