//! Loan and payment models
use async_graphql::SimpleObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Loan model
///
/// `loan_payments` is a write-time mirror of the global payment collection
/// filtered by this loan's id. The query-graph surface ignores it and
/// resolves payments relationally; see [`crate::graphql`].
#[derive(Debug, Serialize, Deserialize, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Loan {
    pub id: i64,
    pub name: String,
    pub principal: f64,
    pub interest_rate: f64,
    pub due_date: NaiveDate,
    #[graphql(skip)]
    pub loan_payments: Vec<Payment>,
}

/// Payment model
///
/// Payment ids come from one global sequence shared by every loan.
#[derive(Debug, Serialize, Deserialize, Clone, SimpleObject)]
#[graphql(name = "LoanPayment")]
pub struct Payment {
    pub id: i64,
    pub loan_id: i64,
    pub payment_date: NaiveDate,
    #[graphql(name = "amountPaid")]
    pub amount: f64,
}

/// Validated fields for a new loan, produced by the validation layer
#[derive(Debug, Clone)]
pub struct NewLoan {
    pub name: String,
    pub principal: f64,
    pub interest_rate: f64,
    pub due_date: NaiveDate,
}

/// Validated fields for a new payment
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub payment_date: NaiveDate,
    pub amount: f64,
}
