//! Application state

use loan_ledger_store::RecordStore;
use std::sync::Arc;

/// Shared application state; the store handle is injected at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}
