//! Repair of arbitrary or legacy persisted blobs into the current model.

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::ledger::Ledger;
use crate::domain::transaction::{Transaction, TransactionKind};

const DEFAULT_ACCOUNT_NAME: &str = "Cuenta";
const DEFAULT_CATEGORY: &str = "General";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalizes whatever shape was last persisted into a well-formed ledger.
///
/// Missing collections become empty, missing fields get their defaults, and
/// legacy vocabulary is migrated (accounts that stored only a live `balance`
/// adopt it as their `initial` seed; the old `income` type maps to
/// `ingreso`). The repaired parts are returned through
/// [`Ledger::from_parts`], so normalization and recomputation are never
/// decoupled — and because balances are always re-derived from `initial`,
/// the whole routine is idempotent.
pub fn normalize_state(raw: &Value) -> Ledger {
    let accounts = raw
        .get("accounts")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(normalize_account).collect())
        .unwrap_or_default();
    let transactions = raw
        .get("transactions")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(normalize_transaction).collect())
        .unwrap_or_default();
    Ledger::from_parts(accounts, transactions)
}

fn normalize_account(entry: &Value) -> Account {
    let balance = coerce_number(entry.get("balance")).unwrap_or(0.0);
    // Legacy records stored only a live balance; it becomes the new seed.
    let initial = entry
        .get("initial")
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite())
        .unwrap_or(balance);
    Account {
        id: id_string(entry.get("id")).unwrap_or_else(generated_id),
        name: text_or(entry.get("name"), DEFAULT_ACCOUNT_NAME),
        initial,
        balance,
    }
}

fn normalize_transaction(entry: &Value) -> Transaction {
    Transaction {
        id: id_string(entry.get("id")).unwrap_or_else(generated_id),
        // Kept verbatim; validity is enforced lazily by the recompute pass.
        account_id: id_string(entry.get("accountId")).unwrap_or_default(),
        amount: coerce_number(entry.get("amount")).unwrap_or(0.0),
        kind: normalize_kind(entry.get("type")),
        category: text_or(entry.get("category"), DEFAULT_CATEGORY),
        date: normalize_date(entry.get("date")),
        desc: entry
            .get("desc")
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

fn normalize_kind(value: Option<&Value>) -> TransactionKind {
    match value.and_then(Value::as_str) {
        Some("ingreso") => TransactionKind::Ingreso,
        Some("gasto") => TransactionKind::Gasto,
        // Early versions persisted English vocabulary.
        Some("income") => TransactionKind::Ingreso,
        _ => TransactionKind::Gasto,
    }
}

fn normalize_date(value: Option<&Value>) -> NaiveDate {
    value
        .and_then(Value::as_str)
        .and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
        .unwrap_or_else(|| Utc::now().date_naive())
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64().filter(|parsed| parsed.is_finite()),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}

fn id_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => fallback.to_string(),
    }
}

fn generated_id() -> String {
    Uuid::new_v4().to_string()
}
