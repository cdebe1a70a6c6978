pub mod json_backend;

use crate::{domain::ledger::Ledger, errors::FinanzasError};

pub type Result<T> = std::result::Result<T, FinanzasError>;

/// Abstraction over the persistence transport for the aggregate document.
///
/// `load` yields `None` on first run. Callers treat `save` as fire-and-forget:
/// a failure is logged and never blocks or rolls back an in-memory mutation.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn load(&self) -> Result<Option<Ledger>>;
}

pub use json_backend::JsonStorage;
