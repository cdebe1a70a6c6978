//! Validated entry points for the transaction flows.

use crate::domain::ledger::Ledger;
use crate::domain::transaction::{Transaction, TransactionPatch};

use super::{ServiceError, ServiceResult};

/// Input-boundary checks and state transitions for transactions.
///
/// Every accepted operation returns a fresh ledger whose balances were
/// re-derived; a rejected one returns an error and the caller keeps the
/// prior state.
pub struct TransactionService;

impl TransactionService {
    /// Prepends a new transaction after validating the user input.
    pub fn add(ledger: &Ledger, transaction: Transaction) -> ServiceResult<Ledger> {
        validate_amount(transaction.amount)?;
        validate_account_selected(&transaction.account_id)?;
        Ok(ledger.with_transaction(transaction))
    }

    /// Merges a patch over the transaction with the matching id.
    ///
    /// An unknown id is not an input error: the edit degrades to a no-op,
    /// matching the delete contract.
    pub fn edit(ledger: &Ledger, patch: TransactionPatch) -> ServiceResult<Ledger> {
        if let Some(amount) = patch.amount {
            validate_amount(amount)?;
        }
        if let Some(account_id) = patch.account_id.as_deref() {
            validate_account_selected(account_id)?;
        }
        Ok(ledger.with_edited_transaction(&patch))
    }

    /// Removes the transaction with the matching id (no-op when absent).
    pub fn remove(ledger: &Ledger, id: &str) -> Ledger {
        ledger.without_transaction(id)
    }
}

fn validate_amount(amount: f64) -> ServiceResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ServiceError::Invalid(
            "Amount must be a number greater than zero".into(),
        ))
    }
}

fn validate_account_selected(account_id: &str) -> ServiceResult<()> {
    if account_id.trim().is_empty() {
        Err(ServiceError::Invalid("Select an account".into()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountDraft;
    use crate::domain::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn base_ledger() -> Ledger {
        Ledger::default().with_account(AccountDraft {
            id: Some("A".into()),
            ..AccountDraft::new("Banco", 100.0)
        })
    }

    fn sample(amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            "A",
            amount,
            kind,
            "comida",
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        )
    }

    #[test]
    fn add_prepends_and_recomputes() {
        let ledger = base_ledger();
        let next =
            TransactionService::add(&ledger, sample(30.0, TransactionKind::Ingreso)).unwrap();
        let next = TransactionService::add(&next, sample(20.0, TransactionKind::Gasto)).unwrap();
        assert_eq!(next.transactions[0].kind, TransactionKind::Gasto);
        assert_eq!(next.accounts[0].balance, 110.0);
    }

    #[test]
    fn add_rejects_non_positive_amount() {
        let ledger = base_ledger();
        for amount in [0.0, -5.0, f64::NAN] {
            let err = TransactionService::add(&ledger, sample(amount, TransactionKind::Gasto))
                .expect_err("invalid amount must be rejected");
            assert!(matches!(err, ServiceError::Invalid(_)));
        }
    }

    #[test]
    fn add_rejects_missing_account_selection() {
        let ledger = base_ledger();
        let mut txn = sample(10.0, TransactionKind::Gasto);
        txn.account_id = String::new();
        let err = TransactionService::add(&ledger, txn).expect_err("must reject");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn edit_merges_patch_and_keeps_other_fields() {
        let ledger = base_ledger();
        let txn = sample(20.0, TransactionKind::Gasto).with_desc("café");
        let id = txn.id.clone();
        let ledger = TransactionService::add(&ledger, txn).unwrap();

        let patch = TransactionPatch {
            amount: Some(25.0),
            ..TransactionPatch::for_id(id.clone())
        };
        let next = TransactionService::edit(&ledger, patch).unwrap();
        let edited = next.transaction(&id).unwrap();
        assert_eq!(edited.amount, 25.0);
        assert_eq!(edited.category, "comida");
        assert_eq!(edited.desc.as_deref(), Some("café"));
        assert_eq!(next.accounts[0].balance, 75.0);
    }

    #[test]
    fn edit_unknown_id_is_a_noop() {
        let ledger = base_ledger();
        let ledger =
            TransactionService::add(&ledger, sample(10.0, TransactionKind::Gasto)).unwrap();
        let patch = TransactionPatch {
            amount: Some(99.0),
            ..TransactionPatch::for_id("missing")
        };
        let next = TransactionService::edit(&ledger, patch).unwrap();
        assert_eq!(next, ledger);
    }

    #[test]
    fn remove_restores_initial_when_history_empties() {
        let ledger = base_ledger();
        let txn = sample(40.0, TransactionKind::Gasto);
        let id = txn.id.clone();
        let ledger = TransactionService::add(&ledger, txn).unwrap();
        assert_eq!(ledger.accounts[0].balance, 60.0);

        let next = TransactionService::remove(&ledger, &id);
        assert!(next.transactions.is_empty());
        assert_eq!(next.accounts[0].balance, 100.0);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let ledger = base_ledger();
        let next = TransactionService::remove(&ledger, "missing");
        assert_eq!(next, ledger);
    }
}
