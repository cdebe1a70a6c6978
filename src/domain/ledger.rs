use serde::{Deserialize, Serialize};

use crate::core::recompute::recompute_accounts;
use crate::domain::account::{Account, AccountDraft};
use crate::domain::transaction::{Transaction, TransactionPatch};

/// Root aggregate: the full set of accounts and transactions, treated as one
/// unit of state and one unit of persistence.
///
/// Ledgers are immutable values. Every mutation below returns a new ledger
/// built through [`Ledger::from_parts`], which re-derives every account
/// balance; no operation hand-patches a balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    /// Builds an aggregate from raw parts, running the recompute pass.
    pub fn from_parts(accounts: Vec<Account>, transactions: Vec<Transaction>) -> Self {
        let accounts = recompute_accounts(&accounts, &transactions);
        Self {
            accounts,
            transactions,
        }
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Appends a new account; existing accounts keep their seed untouched.
    pub fn with_account(&self, draft: AccountDraft) -> Self {
        let mut accounts = self.accounts.clone();
        accounts.push(draft.into_account());
        Self::from_parts(accounts, self.transactions.clone())
    }

    /// Prepends a transaction (most-recent-first display convention).
    pub fn with_transaction(&self, transaction: Transaction) -> Self {
        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(transaction);
        transactions.extend(self.transactions.iter().cloned());
        Self::from_parts(self.accounts.clone(), transactions)
    }

    /// Merges a patch over the matching transaction; an unknown id is a
    /// silent no-op apart from the (no-op) recompute pass.
    pub fn with_edited_transaction(&self, patch: &TransactionPatch) -> Self {
        let transactions = self
            .transactions
            .iter()
            .map(|txn| {
                if txn.id == patch.id {
                    let mut updated = txn.clone();
                    patch.apply(&mut updated);
                    updated
                } else {
                    txn.clone()
                }
            })
            .collect();
        Self::from_parts(self.accounts.clone(), transactions)
    }

    /// Removes the transaction with the matching id; absent ids are a no-op.
    pub fn without_transaction(&self, id: &str) -> Self {
        let transactions = self
            .transactions
            .iter()
            .filter(|txn| txn.id != id)
            .cloned()
            .collect();
        Self::from_parts(self.accounts.clone(), transactions)
    }
}
