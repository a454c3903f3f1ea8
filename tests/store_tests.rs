// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;
use tallybook::ids::{IdGenerator, SequentialIds, UuidGenerator};
use tallybook::models::{NewTransaction, TransactionType};
use tallybook::storage::{BUDGET_KEY, KeyValueStore, MemoryStore, SqliteStore, TRANSACTIONS_KEY};
use tallybook::store::{TransactionStore, load_budget, load_transactions, save_budget};
use tempfile::tempdir;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn input(date: &str, amount: &str, kind: TransactionType, cat: &str) -> NewTransaction {
    NewTransaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: d(amount),
        r#type: kind,
        category: cat.into(),
        account: "Cash".into(),
        note: None,
    }
}

#[test]
fn missing_key_loads_empty() {
    let store = MemoryStore::new();
    assert!(load_transactions(&store).is_empty());
    assert_eq!(load_budget(&store), Decimal::ZERO);
}

#[test]
fn malformed_transactions_load_empty() {
    let store = MemoryStore::new().with_entry(TRANSACTIONS_KEY, "invalid json");
    assert!(load_transactions(&store).is_empty());

    let wrong_shape = MemoryStore::new().with_entry(TRANSACTIONS_KEY, r#"{"id": "1"}"#);
    assert!(load_transactions(&wrong_shape).is_empty());

    let tx_store = TransactionStore::open(&store, SequentialIds::default());
    assert!(tx_store.is_empty());
}

#[test]
fn loads_original_wire_format() {
    let raw = json!([
        {"id": "1", "date": "2024-01-01", "amount": 100, "type": "expense", "category": "Food", "account": "Cash"},
        {"id": "2", "date": "2024-01-02", "amount": 12.5, "type": "income", "category": "Gift", "account": "Bank", "note": "birthday"}
    ]);
    let store = MemoryStore::new().with_entry(TRANSACTIONS_KEY, &raw.to_string());
    let list = load_transactions(&store);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].amount, d("100"));
    assert_eq!(list[0].r#type, TransactionType::Expense);
    assert_eq!(list[0].note, None);
    assert_eq!(list[1].amount, d("12.5"));
    assert_eq!(list[1].note.as_deref(), Some("birthday"));
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::new();
    let mut tx_store = TransactionStore::open(&store, SequentialIds::default());
    tx_store.add(input("2024-01-15", "50", TransactionType::Expense, "Food"));
    let mut with_note = input("2024-01-10", "1000.25", TransactionType::Income, "Salary");
    with_note.note = Some("january".into());
    tx_store.add(with_note);
    tx_store.add(input("2024-01-12", "3.99", TransactionType::Expense, "Coffee"));

    let reloaded = load_transactions(&store);
    assert_eq!(reloaded, tx_store.transactions());

    let value: serde_json::Value = serde_json::from_str(&store.raw(TRANSACTIONS_KEY).unwrap()).unwrap();
    assert_eq!(value[0]["type"], "expense");
    assert_eq!(value[0]["amount"], json!(50.0));
    assert!(value[0].get("note").is_none());
    assert_eq!(value[1]["note"], "january");
}

#[test]
fn add_assigns_ids_and_writes_through() {
    let store = MemoryStore::new();
    let mut tx_store = TransactionStore::open(&store, SequentialIds::new("t"));
    let a = tx_store.add(input("2024-01-01", "5", TransactionType::Expense, "Food"));
    let b = tx_store.add(input("2024-01-02", "6", TransactionType::Expense, "Food"));
    assert_eq!(a.id, "t-1");
    assert_eq!(b.id, "t-2");
    assert_eq!(load_transactions(&store).len(), 2);
}

#[test]
fn add_skips_ids_already_in_use() {
    let raw = json!([
        {"id": "tx-1", "date": "2024-01-01", "amount": 1, "type": "expense", "category": "Food", "account": "Cash"}
    ]);
    let store = MemoryStore::new().with_entry(TRANSACTIONS_KEY, &raw.to_string());
    let mut tx_store = TransactionStore::open(&store, SequentialIds::default());
    let created = tx_store.add(input("2024-01-02", "2", TransactionType::Expense, "Food"));
    assert_eq!(created.id, "tx-2");
}

#[test]
fn remove_deletes_by_id_and_ignores_unknown() {
    let store = MemoryStore::new();
    let mut tx_store = TransactionStore::open(&store, SequentialIds::default());
    let a = tx_store.add(input("2024-01-01", "5", TransactionType::Expense, "Food"));
    tx_store.add(input("2024-01-02", "6", TransactionType::Expense, "Rent"));

    assert!(tx_store.remove(&a.id));
    assert!(!tx_store.remove(&a.id));
    assert!(!tx_store.remove("nope"));
    assert_eq!(tx_store.len(), 1);
    assert!(tx_store.get(&a.id).is_none());

    let persisted = load_transactions(&store);
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].category, "Rent");
}

#[test]
fn failed_writes_keep_memory_state() {
    let store = MemoryStore::read_only();
    let mut tx_store = TransactionStore::open(&store, SequentialIds::default());
    tx_store.add(input("2024-01-01", "5", TransactionType::Expense, "Food"));
    assert_eq!(tx_store.len(), 1);
    assert!(store.raw(TRANSACTIONS_KEY).is_none());

    save_budget(&store, d("10"));
    assert_eq!(load_budget(&store), Decimal::ZERO);
}

#[test]
fn budget_round_trips_as_text() {
    let store = MemoryStore::new();
    save_budget(&store, d("1500.00"));
    assert_eq!(store.raw(BUDGET_KEY).as_deref(), Some("1500"));
    assert_eq!(load_budget(&store), d("1500"));
}

#[test]
fn bad_budget_values_load_as_unset() {
    for raw in ["abc", "", "-5"] {
        let store = MemoryStore::new().with_entry(BUDGET_KEY, raw);
        assert_eq!(load_budget(&store), Decimal::ZERO, "raw {:?}", raw);
    }
    let ok = MemoryStore::new().with_entry(BUDGET_KEY, "1000");
    assert_eq!(load_budget(&ok), d("1000"));
}

#[test]
fn sqlite_store_persists_across_connections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tally.sqlite");

    {
        let store = SqliteStore::new(Connection::open(&path).unwrap()).unwrap();
        let mut tx_store = TransactionStore::open(&store, SequentialIds::default());
        tx_store.add(input("2024-01-15", "50", TransactionType::Expense, "Food"));
        save_budget(&store, d("750"));
    }

    let store = SqliteStore::new(Connection::open(&path).unwrap()).unwrap();
    let list = load_transactions(&store);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "tx-1");
    assert_eq!(load_budget(&store), d("750"));
}

#[test]
fn sqlite_store_overwrites_keys() {
    let store = SqliteStore::new(Connection::open_in_memory().unwrap()).unwrap();
    assert_eq!(store.load("k").unwrap(), None);
    store.save("k", "one").unwrap();
    store.save("k", "two").unwrap();
    assert_eq!(store.load("k").unwrap().as_deref(), Some("two"));
}

#[test]
fn uuid_ids_are_unique() {
    let mut ids = UuidGenerator;
    let a = ids.next_id();
    let b = ids.next_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}

#[test]
fn amounts_beyond_json_precision_are_rejected() {
    use tallybook::models::{MAX_AMOUNT, ValidationError, validate_amount};
    use tallybook::utils::parse_positive_decimal;

    assert!(parse_positive_decimal("1234567.891234567891").is_err());
    assert!(parse_positive_decimal("0.001").is_err());
    assert!(parse_positive_decimal("1000000000000").is_err());
    assert_eq!(parse_positive_decimal("12.50").unwrap(), d("12.5"));

    let mut too_precise = input("2024-01-01", "1", TransactionType::Expense, "Food");
    too_precise.amount = d("1234567.891234567891");
    assert_eq!(
        too_precise.validate(),
        Err(ValidationError::TooManyDecimals(d("1234567.891234567891")))
    );
    assert_eq!(
        validate_amount(d("1000000000000")),
        Err(ValidationError::AmountTooLarge(d("1000000000000")))
    );
    assert_eq!(MAX_AMOUNT, d("999999999999.99"));
}

#[test]
fn accepted_amounts_survive_save_and_load() {
    let store = MemoryStore::new();
    let mut tx_store = TransactionStore::open(&store, SequentialIds::default());
    for amount in ["0.01", "1234567.89", "999999999999.99", "7.10"] {
        let mut tx = input("2024-01-01", "1", TransactionType::Expense, "Food");
        tx.amount = tallybook::utils::parse_positive_decimal(amount).unwrap();
        tx.validate().unwrap();
        tx_store.add(tx);
    }
    assert_eq!(load_transactions(&store), tx_store.transactions());
}
