//! Read-only query-graph schema over the loan ledger
//!
//! Exposes `loans` and `loan(id)` plus relationship traversal from a loan to
//! its payments. No mutation root: writes go through the resource surface.

use async_graphql::{ComplexObject, Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::loan::{Loan, Payment};
use crate::loan_service::LoanService;

pub type LoanSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the loan service attached as context data
pub fn build_schema(service: LoanService) -> LoanSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(service)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All loans in insertion order
    async fn loans(&self, ctx: &Context<'_>) -> Vec<Loan> {
        ctx.data_unchecked::<LoanService>().loans()
    }

    /// Single loan lookup; an absent id resolves to null, not an error
    async fn loan(&self, ctx: &Context<'_>, id: i64) -> Option<Loan> {
        ctx.data_unchecked::<LoanService>().loan(id)
    }
}

#[ComplexObject]
impl Loan {
    /// Payments resolved against the global collection at read time
    async fn loan_payments(&self, ctx: &Context<'_>) -> Vec<Payment> {
        ctx.data_unchecked::<LoanService>().payments_for_loan(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{NewLoan, NewPayment};
    use chrono::NaiveDate;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn seeded_schema() -> LoanSchema {
        let service = LoanService::new();
        service
            .create_loan(NewLoan {
                name: "Car Loan".to_string(),
                principal: 10_000.0,
                interest_rate: 5.5,
                due_date: date("2025-01-01"),
            })
            .unwrap();
        service
            .record_payment(
                1,
                NewPayment {
                    payment_date: date("2025-02-01"),
                    amount: 500.0,
                },
            )
            .unwrap();
        build_schema(service)
    }

    #[tokio::test]
    async fn loans_query_returns_scalar_fields() {
        let schema = seeded_schema();

        let resp = schema
            .execute("{ loans { id name interestRate principal dueDate } }")
            .await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        assert_eq!(
            resp.data.into_json().unwrap(),
            json!({
                "loans": [{
                    "id": 1,
                    "name": "Car Loan",
                    "interestRate": 5.5,
                    "principal": 10000.0,
                    "dueDate": "2025-01-01"
                }]
            })
        );
    }

    #[tokio::test]
    async fn loan_traverses_to_its_payments() {
        let schema = seeded_schema();

        let resp = schema
            .execute("{ loan(id: 1) { id loanPayments { id loanId paymentDate amountPaid } } }")
            .await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        assert_eq!(
            resp.data.into_json().unwrap(),
            json!({
                "loan": {
                    "id": 1,
                    "loanPayments": [{
                        "id": 1,
                        "loanId": 1,
                        "paymentDate": "2025-02-01",
                        "amountPaid": 500.0
                    }]
                }
            })
        );
    }

    #[tokio::test]
    async fn absent_loan_resolves_to_null() {
        let schema = seeded_schema();

        let resp = schema.execute("{ loan(id: 999) { id name } }").await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        assert_eq!(resp.data.into_json().unwrap(), json!({ "loan": null }));
    }

    #[tokio::test]
    async fn schema_exposes_no_mutations() {
        let schema = seeded_schema();

        let resp = schema
            .execute(r#"mutation { createLoan(name: "x") { id } }"#)
            .await;

        assert!(!resp.errors.is_empty());
    }
}
