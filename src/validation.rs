//! Input validation shared by the resource handlers
//!
//! Request bodies arrive as loose JSON. Every required field is checked
//! before any typed access, and date fields must parse as ISO `YYYY-MM-DD`.
//! Validation always runs before any store mutation.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::ApiError;
use crate::loan::{NewLoan, NewPayment};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a loan creation payload.
///
/// Requires `name` (non-empty), `principal`, `interest_rate` and `due_date`.
pub fn validate_loan_input(payload: &Value) -> Result<NewLoan, ApiError> {
    let name = payload.get("name").and_then(Value::as_str);
    let principal = payload.get("principal").and_then(Value::as_f64);
    let interest_rate = payload.get("interest_rate").and_then(Value::as_f64);
    let due_date = payload.get("due_date").and_then(Value::as_str);

    let (Some(name), Some(principal), Some(interest_rate), Some(due_date)) =
        (name, principal, interest_rate, due_date)
    else {
        return Err(ApiError::Validation("Invalid input data".to_string()));
    };
    if name.is_empty() {
        return Err(ApiError::Validation("Invalid input data".to_string()));
    }

    Ok(NewLoan {
        name: name.to_string(),
        principal,
        interest_rate,
        due_date: parse_date(due_date)?,
    })
}

/// Validate a payment creation payload.
///
/// Requires `payment_date` and `amount`.
pub fn validate_payment_input(payload: &Value) -> Result<NewPayment, ApiError> {
    let payment_date = payload.get("payment_date").and_then(Value::as_str);
    let amount = payload.get("amount").and_then(Value::as_f64);

    let (Some(payment_date), Some(amount)) = (payment_date, amount) else {
        return Err(ApiError::Validation(
            "Invalid input data. 'payment_date' and 'amount' are required.".to_string(),
        ));
    };

    Ok(NewPayment {
        payment_date: parse_date(payment_date)?,
        amount,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ApiError::Format("Invalid date format. Use YYYY-MM-DD.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_loan_payload_is_accepted() {
        let payload = json!({
            "name": "Car Loan",
            "principal": 10000,
            "interest_rate": 5.5,
            "due_date": "2024-03-15"
        });

        let new = validate_loan_input(&payload).unwrap();
        assert_eq!(new.name, "Car Loan");
        assert_eq!(new.principal, 10000.0);
        assert_eq!(new.interest_rate, 5.5);
        assert_eq!(new.due_date.to_string(), "2024-03-15");
    }

    #[test]
    fn missing_loan_field_is_invalid_input() {
        let payload = json!({
            "name": "Car Loan",
            "interest_rate": 5.5,
            "due_date": "2024-03-15"
        });

        let err = validate_loan_input(&payload).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid input data");
    }

    #[test]
    fn empty_loan_name_is_invalid_input() {
        let payload = json!({
            "name": "",
            "principal": 10000,
            "interest_rate": 5.5,
            "due_date": "2024-03-15"
        });

        assert!(validate_loan_input(&payload).is_err());
    }

    #[test]
    fn out_of_range_date_is_a_format_error() {
        let payload = json!({
            "name": "Car Loan",
            "principal": 10000,
            "interest_rate": 5.5,
            "due_date": "2024-13-40"
        });

        let err = validate_loan_input(&payload).unwrap_err();
        assert!(matches!(err, ApiError::Format(_)));
        assert_eq!(err.to_string(), "Invalid date format. Use YYYY-MM-DD.");
    }

    #[test]
    fn payment_requires_date_and_amount() {
        let err = validate_payment_input(&json!({ "amount": 500 })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input data. 'payment_date' and 'amount' are required."
        );

        let err = validate_payment_input(&json!({ "payment_date": "2025-02-01" })).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let new =
            validate_payment_input(&json!({ "payment_date": "2025-02-01", "amount": 500 }))
                .unwrap();
        assert_eq!(new.amount, 500.0);
    }

    #[test]
    fn payment_date_follows_the_same_format_rule() {
        let err = validate_payment_input(&json!({
            "payment_date": "01-02-2025",
            "amount": 500
        }))
        .unwrap_err();

        assert!(matches!(err, ApiError::Format(_)));
    }
}
