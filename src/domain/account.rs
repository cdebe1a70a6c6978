use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Represents a financial account tracked within the ledger.
///
/// `initial` is the seed balance fixed at creation. `balance` is derived:
/// it always equals `initial` plus the signed sum of every transaction
/// referencing this account, rounded to two decimals. The recompute pass
/// overwrites whatever value the field held on input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub initial: f64,
    #[serde(default)]
    pub balance: f64,
}

impl Account {
    /// Creates a new account with a generated id and the provided seed.
    pub fn new(name: impl Into<String>, initial: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            initial,
            balance: initial,
        }
    }
}

impl Identifiable for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} (${:.2})", self.name, self.balance)
    }
}

/// Incoming account data from the add-account form.
///
/// The seed is taken from the explicit `initial` when present, otherwise
/// from the drafted `balance` (legacy forms only captured a live balance).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

impl AccountDraft {
    /// Drafts an account with only a name and a starting balance.
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            initial: None,
            balance: Some(balance),
        }
    }

    pub(crate) fn into_account(self) -> Account {
        let seed = self
            .initial
            .filter(|value| value.is_finite())
            .or_else(|| self.balance.filter(|value| value.is_finite()))
            .unwrap_or(0.0);
        Account {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            initial: seed,
            balance: seed,
        }
    }
}
