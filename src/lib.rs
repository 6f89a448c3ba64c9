#![doc(test(attr(deny(warnings))))]

//! iexpense keeps a small personal expense log: records are appended, listed
//! by category, and removed by their position within a category. The list is
//! persisted as a JSON blob after every change.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

pub use domain::ExpenseItem;
pub use store::Expenses;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug event.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("iexpense tracing initialized.");
    });
}
