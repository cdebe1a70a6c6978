#![allow(dead_code)]

use chrono::NaiveDate;
use finanzas_core::domain::{Account, Transaction, TransactionKind};

pub fn account(id: &str, name: &str, initial: f64) -> Account {
    Account {
        id: id.into(),
        name: name.into(),
        initial,
        balance: initial,
    }
}

pub fn transaction(id: &str, account_id: &str, amount: f64, kind: TransactionKind) -> Transaction {
    Transaction {
        id: id.into(),
        account_id: account_id.into(),
        amount,
        kind,
        category: "General".into(),
        date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        desc: None,
    }
}
