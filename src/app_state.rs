//! Application state shared across handlers

use axum::extract::FromRef;

use crate::graphql::{self, LoanSchema};
use crate::loan_service::LoanService;

/// Shared application state
///
/// Both API surfaces hold the same loan service: the schema carries a clone
/// as context data, so resource writes are immediately visible to queries.
#[derive(Clone)]
pub struct AppState {
    pub loan_service: LoanService,
    pub schema: LoanSchema,
}

impl AppState {
    pub fn new() -> Self {
        let loan_service = LoanService::new();
        let schema = graphql::build_schema(loan_service.clone());
        Self {
            loan_service,
            schema,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromRef<AppState> for LoanService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loan_service.clone()
    }
}

impl FromRef<AppState> for LoanSchema {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.schema.clone()
    }
}
