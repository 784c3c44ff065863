//! API handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use loan_ledger_core::{
    reassign_owner, summarize, Loan, LoanShare, LoanSummary, NewLoan, NewUser, ScheduleEntry,
    User,
};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> ApiResult<User> {
    let user = state.store.create_user(&payload).await?;
    Ok(Json(user))
}

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    Ok(Json(state.store.list_users().await?))
}

/// Create a loan after checking its terms and that the owner exists.
pub async fn create_loan(
    State(state): State<AppState>,
    Json(payload): Json<NewLoan>,
) -> ApiResult<Loan> {
    payload.validate()?;
    state.store.get_user(payload.user_id).await?;

    let loan = state.store.create_loan(&payload).await?;
    Ok(Json(loan))
}

pub async fn list_loans(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<Loan>> {
    Ok(Json(state.store.list_loans(user_id).await?))
}

pub async fn loan_schedule(
    State(state): State<AppState>,
    Path(loan_id): Path<i64>,
) -> ApiResult<Vec<ScheduleEntry>> {
    let loan = state.store.get_loan(loan_id).await?;
    Ok(Json(loan.schedule()?))
}

pub async fn loan_summary(
    State(state): State<AppState>,
    Path((loan_id, month)): Path<(i64, i64)>,
) -> ApiResult<LoanSummary> {
    let loan = state.store.get_loan(loan_id).await?;
    let schedule = loan.schedule()?;
    Ok(Json(summarize(&schedule, month)))
}

/// Hand a loan to another user; the caller must name the current owner.
pub async fn share_loan(
    State(state): State<AppState>,
    Json(payload): Json<LoanShare>,
) -> ApiResult<Loan> {
    let mut loan = state.store.get_loan(payload.loan_id).await?;
    reassign_owner(&mut loan, &payload)?;
    state.store.get_user(payload.target_user_id).await?;

    let loan = state.store.update_loan(&loan).await?;

    info!(
        loan_id = loan.id,
        from = payload.source_user_id,
        to = payload.target_user_id,
        "loan shared"
    );
    Ok(Json(loan))
}
