//! Route definitions for the loan API

use axum::{
    routing::{get, post},
    Router,
};

use crate::app_state::AppState;
use crate::handlers::*;

// Resource routes
pub fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/add-loan", post(create_loan))
        .route("/loans/:loan_id/payments", post(add_payment_to_loan))
}

// Query-graph routes
pub fn graphql_routes() -> Router<AppState> {
    Router::new().route("/graphql", get(graphiql).post(graphql_handler))
}

// Service routes
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
