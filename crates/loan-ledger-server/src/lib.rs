//! HTTP front end for the loan ledger.
//!
//! Routes translate requests into record-store calls and the pure
//! amortization functions in `loan-ledger-core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::Router;
use loan_ledger_store::RecordStore;
use std::sync::Arc;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

/// Build the application router over an injected store.
pub fn create_app(store: Arc<dyn RecordStore>) -> Router {
    routes::create_router(AppState::new(store))
}
