//! Loanbook Backend Library
//!
//! This library exports the core modules for the loan-tracking backend
//! server: an in-memory ledger of loans and payments exposed through a
//! resource surface (REST) and a read-only query-graph surface (GraphQL).

pub mod app_state;
pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod loan;
pub mod loan_service;
pub mod routes;
pub mod validation;
