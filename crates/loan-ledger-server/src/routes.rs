//! API Routes

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Users
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        // Loans
        .route("/loans", post(handlers::create_loan))
        .route("/loans/:user_id", get(handlers::list_loans))
        .route("/loan_schedule/:loan_id", get(handlers::loan_schedule))
        .route("/loan_summary/:loan_id/:month", get(handlers::loan_summary))
        .route("/loan_share", post(handlers::share_loan))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
