pub mod account_service;
pub mod summary_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use summary_service::{CategoryTotal, FlowTotals, SummaryService, TransactionFilter};
pub use transaction_service::TransactionService;

use crate::errors::FinanzasError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] FinanzasError),
    #[error("{0}")]
    Invalid(String),
}
