// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Write-through transaction collection and budget scalar. Storage problems
//! are logged and absorbed here; callers always get a usable value back.

use crate::ids::IdGenerator;
use crate::models::{NewTransaction, Transaction};
use crate::storage::{BUDGET_KEY, KeyValueStore, TRANSACTIONS_KEY};
use rust_decimal::Decimal;
use tracing::{debug, error, warn};

pub struct TransactionStore<S, G> {
    storage: S,
    ids: G,
    transactions: Vec<Transaction>,
}

impl<S: KeyValueStore, G: IdGenerator> TransactionStore<S, G> {
    /// Opens the store, reading the persisted collection (empty on missing or
    /// malformed data).
    pub fn open(storage: S, ids: G) -> Self {
        let transactions = load_transactions(&storage);
        Self {
            storage,
            ids,
            transactions,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Appends the transaction under a fresh id and persists the collection.
    /// Input is assumed validated (see `NewTransaction::validate`).
    pub fn add(&mut self, input: NewTransaction) -> Transaction {
        let mut id = self.ids.next_id();
        while self.get(&id).is_some() {
            warn!(id = %id, "generated id already in use, drawing another");
            id = self.ids.next_id();
        }
        let tx = input.with_id(id);
        debug!(id = %tx.id, amount = %tx.amount, kind = %tx.r#type, "transaction added");
        self.transactions.push(tx.clone());
        self.persist();
        tx
    }

    /// Removes the transaction with `id`; absent ids are a no-op. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        debug!(id, removed, "transaction remove");
        self.persist();
        removed
    }

    fn persist(&self) {
        save_transactions(&self.storage, &self.transactions);
    }
}

pub fn load_transactions<S: KeyValueStore>(storage: &S) -> Vec<Transaction> {
    let raw = match storage.load(TRANSACTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!(error = %err, "failed to load transactions");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Transaction>>(&raw) {
        Ok(list) => {
            debug!(count = list.len(), "transactions loaded");
            list
        }
        Err(err) => {
            error!(error = %err, "failed to load transactions: malformed data");
            Vec::new()
        }
    }
}

pub fn save_transactions<S: KeyValueStore>(storage: &S, transactions: &[Transaction]) {
    let json = match serde_json::to_string(transactions) {
        Ok(json) => json,
        Err(err) => {
            error!(error = %err, "failed to serialize transactions");
            return;
        }
    };
    if let Err(err) = storage.save(TRANSACTIONS_KEY, &json) {
        error!(error = %err, "failed to save transactions");
    }
}

/// Reads the budget scalar; 0 means unset.
pub fn load_budget<S: KeyValueStore>(storage: &S) -> Decimal {
    let raw = match storage.load(BUDGET_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Decimal::ZERO,
        Err(err) => {
            error!(error = %err, "failed to load budget");
            return Decimal::ZERO;
        }
    };
    match raw.trim().parse::<Decimal>() {
        Ok(v) if v >= Decimal::ZERO => v,
        Ok(v) => {
            error!(value = %v, "failed to load budget: negative value");
            Decimal::ZERO
        }
        Err(err) => {
            error!(error = %err, raw = %raw, "failed to load budget: malformed data");
            Decimal::ZERO
        }
    }
}

pub fn save_budget<S: KeyValueStore>(storage: &S, budget: Decimal) {
    if let Err(err) = storage.save(BUDGET_KEY, &budget.normalize().to_string()) {
        error!(error = %err, "failed to save budget");
    }
}
