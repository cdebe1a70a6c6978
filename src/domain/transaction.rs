use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Direction of a ledger movement.
///
/// The wire vocabulary is fixed: income is `ingreso`, expense is `gasto`.
/// The normalizer maps legacy values onto it; nothing else survives a load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Ingreso,
    Gasto,
}

impl TransactionKind {
    /// Sign carried by the kind: income adds, expense subtracts.
    pub fn signum(self) -> f64 {
        match self {
            TransactionKind::Ingreso => 1.0,
            TransactionKind::Gasto => -1.0,
        }
    }
}

/// A single ledger movement against one account.
///
/// `account_id` is a lookup-only reference: a transaction whose id matches
/// no known account stays stored but contributes nothing to any balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Transaction {
    pub fn new(
        account_id: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.into(),
            amount,
            kind,
            category: category.into(),
            date,
            desc: None,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Contribution of this transaction to its account's balance.
    pub fn signed_amount(&self) -> f64 {
        let magnitude = if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        };
        self.kind.signum() * magnitude
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        // Display falls back to the category when no description was typed.
        let label = self.desc.as_deref().unwrap_or(&self.category);
        format!("{} ({})", label, self.date)
    }
}

/// Field-level patch applied over an existing transaction.
///
/// Unset fields keep the current value; the id never changes. `desc` is
/// doubly optional so a patch can clear it as well as leave it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub id: String,
    #[serde(
        rename = "accountId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<Option<String>>,
}

impl TransactionPatch {
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, txn: &mut Transaction) {
        if let Some(account_id) = &self.account_id {
            txn.account_id = account_id.clone();
        }
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        if let Some(category) = &self.category {
            txn.category = category.clone();
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
        if let Some(desc) = &self.desc {
            txn.desc = desc.clone();
        }
    }
}
