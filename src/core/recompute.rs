//! Full-pass derivation of account balances from seeds plus history.

use std::collections::HashMap;

use crate::domain::account::Account;
use crate::domain::transaction::Transaction;

/// Rounds a monetary value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Re-derives every account balance from scratch.
///
/// Each account is seeded with `balance = initial` (any incoming balance is
/// ignored), then the transactions are folded in input order: `+amount` for
/// income, `-amount` for expense. A transaction referencing an unknown
/// account id is skipped without error. The accumulated balance is rounded
/// once per account after the full fold, not per transaction.
///
/// Output preserves the first-seen order of account ids; a duplicate id
/// replaces the earlier record in place. Pure: the same inputs always yield
/// the same output.
pub fn recompute_accounts(accounts: &[Account], transactions: &[Transaction]) -> Vec<Account> {
    let mut result: Vec<Account> = Vec::with_capacity(accounts.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(accounts.len());

    for account in accounts {
        let mut seeded = account.clone();
        seeded.balance = finite_or_zero(account.initial);
        match index.get(&seeded.id) {
            Some(&pos) => result[pos] = seeded,
            None => {
                index.insert(seeded.id.clone(), result.len());
                result.push(seeded);
            }
        }
    }

    for txn in transactions {
        let Some(&pos) = index.get(&txn.account_id) else {
            continue;
        };
        result[pos].balance += txn.signed_amount();
    }

    for account in &mut result {
        account.balance = round2(account.balance);
    }

    result
}

/// Sums derived balances across all accounts.
pub fn total_balance(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .map(|account| finite_or_zero(account.balance))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn account(id: &str, initial: f64) -> Account {
        Account {
            id: id.into(),
            name: id.into(),
            initial,
            balance: 0.0,
        }
    }

    fn txn(account_id: &str, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            account_id,
            amount,
            kind,
            "General",
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn seeds_from_initial_and_folds_signed_amounts() {
        let accounts = vec![account("A", 100.0)];
        let transactions = vec![
            txn("A", 30.0, TransactionKind::Ingreso),
            txn("A", 20.0, TransactionKind::Gasto),
        ];
        let result = recompute_accounts(&accounts, &transactions);
        assert_eq!(result[0].balance, 110.0);
    }

    #[test]
    fn ignores_stale_input_balance() {
        let mut stale = account("A", 50.0);
        stale.balance = 9999.0;
        let result = recompute_accounts(&[stale], &[]);
        assert_eq!(result[0].balance, 50.0);
    }

    #[test]
    fn orphan_transactions_change_nothing() {
        let accounts = vec![account("A", 100.0)];
        let transactions = vec![txn("Z", 10.0, TransactionKind::Ingreso)];
        let result = recompute_accounts(&accounts, &transactions);
        assert_eq!(result[0].balance, 100.0);
    }

    #[test]
    fn rounds_once_after_full_summation() {
        // Two 10.004 credits sum to 20.008 before rounding; per-transaction
        // rounding would have produced 20.00 instead of 20.01.
        let accounts = vec![account("A", 0.0)];
        let transactions = vec![
            txn("A", 10.004, TransactionKind::Ingreso),
            txn("A", 10.004, TransactionKind::Ingreso),
        ];
        let result = recompute_accounts(&accounts, &transactions);
        assert_eq!(result[0].balance, 20.01);
    }

    #[test]
    fn duplicate_account_id_keeps_first_position_last_record() {
        let first = account("A", 1.0);
        let mut second = account("A", 2.0);
        second.name = "A2".into();
        let other = account("B", 0.0);
        let result = recompute_accounts(&[first, other, second], &[]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "A2");
        assert_eq!(result[0].balance, 2.0);
        assert_eq!(result[1].id, "B");
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let accounts = vec![account("A", 0.1), account("B", 7.0)];
        let transactions = vec![
            txn("A", 0.2, TransactionKind::Ingreso),
            txn("B", 1.35, TransactionKind::Gasto),
        ];
        let once = recompute_accounts(&accounts, &transactions);
        let twice = recompute_accounts(&accounts, &transactions);
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(a.balance.to_bits(), b.balance.to_bits());
        }
    }

    #[test]
    fn total_balance_sums_accounts() {
        let result = recompute_accounts(&[account("A", 10.5), account("B", 4.5)], &[]);
        assert_eq!(total_balance(&result), 15.0);
    }
}
