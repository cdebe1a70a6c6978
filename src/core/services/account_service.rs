use crate::domain::account::AccountDraft;
use crate::domain::ledger::Ledger;

use super::{ServiceError, ServiceResult};

/// Validated entry point for the add-account flow.
///
/// Accounts are append-only at the model level: there is no edit or delete
/// path in this version.
pub struct AccountService;

impl AccountService {
    /// Appends a new account drafted by the user and returns the next state.
    ///
    /// Rejection leaves the prior ledger untouched; the caller keeps it.
    pub fn add(ledger: &Ledger, draft: AccountDraft) -> ServiceResult<Ledger> {
        if draft.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Account name is required".into()));
        }
        Ok(ledger.with_account(draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_blank_name() {
        let ledger = Ledger::default();
        let err = AccountService::add(&ledger, AccountDraft::new("  ", 10.0))
            .expect_err("blank name must be rejected");
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn add_seeds_initial_from_drafted_balance() {
        let ledger = Ledger::default();
        let next = AccountService::add(&ledger, AccountDraft::new("Banco", 120.0)).unwrap();
        assert_eq!(next.accounts.len(), 1);
        assert_eq!(next.accounts[0].initial, 120.0);
        assert_eq!(next.accounts[0].balance, 120.0);
    }

    #[test]
    fn explicit_initial_wins_over_balance() {
        let ledger = Ledger::default();
        let draft = AccountDraft {
            initial: Some(200.0),
            ..AccountDraft::new("Banco", 120.0)
        };
        let next = AccountService::add(&ledger, draft).unwrap();
        assert_eq!(next.accounts[0].initial, 200.0);
    }
}
