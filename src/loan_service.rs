//! Loan service layer - in-memory ledger for loans and payments

use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::loan::{Loan, NewLoan, NewPayment, Payment};

/// The two record collections.
///
/// Both live behind a single lock so that id assignment and the append it
/// feeds stay serialized under concurrent requests.
#[derive(Debug, Default)]
struct Ledger {
    loans: Vec<Loan>,
    payments: Vec<Payment>,
}

/// Loan service owning the in-memory ledger
///
/// Cloning is cheap; clones share the same ledger.
#[derive(Clone, Default)]
pub struct LoanService {
    ledger: Arc<Mutex<Ledger>>,
}

impl LoanService {
    /// Create a new loan service with an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new loan under the next sequential id and return it.
    pub fn create_loan(&self, new: NewLoan) -> Result<Loan, ApiError> {
        let mut ledger = self
            .ledger
            .lock()
            .map_err(|_| ApiError::Internal("ledger lock poisoned".to_string()))?;

        let id = next_id(ledger.loans.iter().map(|l| l.id));
        let loan = Loan {
            id,
            name: new.name,
            principal: new.principal,
            interest_rate: new.interest_rate,
            due_date: new.due_date,
            loan_payments: Vec::new(),
        };
        ledger.loans.push(loan.clone());

        tracing::info!(loan_id = id, name = %loan.name, "loan created");
        Ok(loan)
    }

    /// Record a payment against an existing loan.
    ///
    /// The existence check runs before any append, so an unknown loan id
    /// leaves both collections untouched. The payment lands in the global
    /// collection and in the loan's embedded mirror, which must stay in
    /// lockstep.
    pub fn record_payment(&self, loan_id: i64, new: NewPayment) -> Result<Payment, ApiError> {
        let mut ledger = self
            .ledger
            .lock()
            .map_err(|_| ApiError::Internal("ledger lock poisoned".to_string()))?;

        if !ledger.loans.iter().any(|l| l.id == loan_id) {
            return Err(ApiError::NotFound("Loan not found".to_string()));
        }

        let id = next_id(ledger.payments.iter().map(|p| p.id));
        let payment = Payment {
            id,
            loan_id,
            payment_date: new.payment_date,
            amount: new.amount,
        };
        ledger.payments.push(payment.clone());
        if let Some(loan) = ledger.loans.iter_mut().find(|l| l.id == loan_id) {
            loan.loan_payments.push(payment.clone());
        }

        tracing::info!(payment_id = id, loan_id, "payment recorded");
        Ok(payment)
    }

    /// Get loan by id
    pub fn loan(&self, id: i64) -> Option<Loan> {
        match self.ledger.lock() {
            Ok(ledger) => ledger.loans.iter().find(|l| l.id == id).cloned(),
            Err(_) => {
                tracing::warn!(loan_id = id, "ledger lock poisoned; resolving loan as absent");
                None
            }
        }
    }

    /// List loans in insertion order
    pub fn loans(&self) -> Vec<Loan> {
        match self.ledger.lock() {
            Ok(ledger) => ledger.loans.clone(),
            Err(_) => {
                tracing::warn!("ledger lock poisoned; resolving loan list as empty");
                Vec::new()
            }
        }
    }

    /// Payments recorded against a loan, in insertion order.
    ///
    /// Resolved by filtering the global collection, never by reading the
    /// embedded mirror. No matches is an empty list, and so is an internal
    /// failure: a nested field must never fail the enclosing query.
    pub fn payments_for_loan(&self, loan_id: i64) -> Vec<Payment> {
        match self.ledger.lock() {
            Ok(ledger) => ledger
                .payments
                .iter()
                .filter(|p| p.loan_id == loan_id)
                .cloned()
                .collect(),
            Err(_) => {
                tracing::warn!(loan_id, "ledger lock poisoned; resolving payments as empty");
                Vec::new()
            }
        }
    }
}

/// Next sequential id: max existing + 1, or 1 for an empty collection
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}
