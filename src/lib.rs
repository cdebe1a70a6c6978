#![doc(test(attr(deny(warnings))))]

//! Finanzas Core offers the ledger model, balance recomputation, and
//! state-migration primitives behind a personal finance tracker.
//!
//! The aggregate `{accounts, transactions}` is an immutable value: every
//! mutation produces a new aggregate and ends with a full recomputation pass,
//! so a ledger with stale balances can never be observed.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finanzas Core tracing initialized.");
    });
}
