use chrono::{Duration, NaiveDate};

use crate::core::recompute::{round2, total_balance};
use crate::domain::ledger::Ledger;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Read-only aggregations consumed by the dashboard and listing screens.
pub struct SummaryService;

/// Expense total for one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Income, expense, and net totals over a transaction set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowTotals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Linear filter over the transaction list; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub account_id: Option<String>,
    /// Rolling window: keep transactions dated within the last N days,
    /// inclusive of the reference date.
    pub last_days: Option<u32>,
    /// Case-insensitive substring match on the category label.
    pub category_query: Option<String>,
}

impl SummaryService {
    /// Total balance across all accounts.
    pub fn total_balance(ledger: &Ledger) -> f64 {
        total_balance(&ledger.accounts)
    }

    /// Sums expenses per category, keeping first-seen category order.
    pub fn expenses_by_category(ledger: &Ledger) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for txn in &ledger.transactions {
            if txn.kind != TransactionKind::Gasto {
                continue;
            }
            match totals
                .iter_mut()
                .find(|entry| entry.category == txn.category)
            {
                Some(entry) => entry.total += txn.amount,
                None => totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                }),
            }
        }
        totals
    }

    /// The newest transactions (the list head, most-recent-first).
    pub fn recent(ledger: &Ledger, count: usize) -> &[Transaction] {
        &ledger.transactions[..ledger.transactions.len().min(count)]
    }

    /// Applies the filter relative to `today` and returns matching entries
    /// in list order.
    pub fn filter<'a>(
        ledger: &'a Ledger,
        filter: &TransactionFilter,
        today: NaiveDate,
    ) -> Vec<&'a Transaction> {
        let cutoff = filter
            .last_days
            .map(|days| today - Duration::days(i64::from(days.saturating_sub(1))));
        let query = filter
            .category_query
            .as_deref()
            .map(|text| text.to_lowercase());
        ledger
            .transactions
            .iter()
            .filter(|txn| {
                if let Some(kind) = filter.kind {
                    if txn.kind != kind {
                        return false;
                    }
                }
                if let Some(account_id) = filter.account_id.as_deref() {
                    if txn.account_id != account_id {
                        return false;
                    }
                }
                if let Some(query) = query.as_deref() {
                    if !txn.category.to_lowercase().contains(query) {
                        return false;
                    }
                }
                if let Some(cutoff) = cutoff {
                    if txn.date < cutoff {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    /// Totals over a filtered set; net is rounded to two decimals the way
    /// the summary row displays it.
    pub fn flow_totals(transactions: &[&Transaction]) -> FlowTotals {
        let income: f64 = transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Ingreso)
            .map(|txn| txn.amount)
            .sum();
        let expense: f64 = transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Gasto)
            .map(|txn| txn.amount)
            .sum();
        FlowTotals {
            income,
            expense,
            net: round2(income - expense),
        }
    }
}
