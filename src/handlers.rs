//! API handlers for the loan backend

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::loan::{Loan, Payment};
use crate::validation::{validate_loan_input, validate_payment_input};

// ===== Resource handlers =====

/// Create a new loan
pub async fn create_loan(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Loan>)> {
    let new = validate_loan_input(&payload)?;
    let loan = state.loan_service.create_loan(new)?;
    Ok((StatusCode::CREATED, Json(loan)))
}

/// Record a payment against an existing loan
pub async fn add_payment_to_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<i64>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Payment>)> {
    let new = validate_payment_input(&payload)?;
    let payment = state.loan_service.record_payment(loan_id, new)?;
    Ok((StatusCode::CREATED, Json(payment)))
}

// ===== Query-graph handlers =====

/// Execute a query document against the loan schema
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serve the GraphiQL IDE
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

// ===== Service handlers =====

pub async fn root() -> &'static str {
    "Loanbook API Server"
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
