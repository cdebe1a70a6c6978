pub mod account;
pub mod common;
pub mod ledger;
pub mod transaction;

pub use account::{Account, AccountDraft};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind, TransactionPatch};
