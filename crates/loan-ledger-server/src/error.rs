//! Mapping of ledger and store failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use loan_ledger_core::LoanLedgerError;
use loan_ledger_store::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Ledger(#[from] LoanLedgerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Ledger(e) => match e {
                LoanLedgerError::InvalidLoanParameters { .. } => StatusCode::BAD_REQUEST,
                LoanLedgerError::OwnershipMismatch { .. } => StatusCode::NOT_FOUND,
            },
            ApiError::Store(e) => match e {
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
