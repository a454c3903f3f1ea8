// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application state owner. Holds the transaction store and the budget and
//! recomputes every derived view from them on request.

use crate::budget::evaluate;
use crate::filter;
use crate::ids::IdGenerator;
use crate::models::{BudgetStatus, FilterCriteria, MonthlySummary, NewTransaction, Transaction};
use crate::storage::KeyValueStore;
use crate::store::{TransactionStore, load_budget, save_budget};
use crate::summary::aggregate;
use chrono::Local;
use rust_decimal::Decimal;
use tracing::debug;

pub struct Tracker<S, G> {
    store: TransactionStore<S, G>,
    budget: Decimal,
}

impl<S: KeyValueStore, G: IdGenerator> Tracker<S, G> {
    pub fn open(storage: S, ids: G) -> Self {
        let store = TransactionStore::open(storage, ids);
        let budget = load_budget(store.storage());
        Self { store, budget }
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub fn add_transaction(&mut self, input: NewTransaction) -> Transaction {
        self.store.add(input)
    }

    pub fn remove_transaction(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    pub fn budget(&self) -> Decimal {
        self.budget
    }

    /// Sets the monthly budget (0 clears it) and persists it.
    pub fn set_budget(&mut self, budget: Decimal) {
        debug!(budget = %budget, "budget updated");
        self.budget = budget;
        save_budget(self.store.storage(), budget);
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Transaction> {
        filter::filter(self.store.transactions(), criteria)
    }

    pub fn categories(&self) -> Vec<String> {
        filter::categories(self.store.transactions())
    }

    /// Always computed over the unfiltered collection.
    pub fn monthly_summary(&self, month: &str) -> MonthlySummary {
        aggregate(self.store.transactions(), month)
    }

    pub fn budget_status(&self, month: &str) -> BudgetStatus {
        evaluate(self.budget, self.monthly_summary(month).total_expenses)
    }
}

/// The current local calendar month as `YYYY-MM`.
pub fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}
