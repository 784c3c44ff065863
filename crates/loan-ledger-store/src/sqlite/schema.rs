//! Row types for sqlx mapping of the `users` and `loans` tables.
//!
//! Schema lives in `migrations/20250101000000_init.sql`.

use loan_ledger_core::{Loan, User};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::StoreError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LoanRow {
    pub id: i64,
    pub user_id: i64,
    pub amount: String, // Decimal stored as TEXT
    pub annual_interest_rate: String,
    pub monthly_payments: i64,
}

impl TryFrom<LoanRow> for Loan {
    type Error = StoreError;

    fn try_from(row: LoanRow) -> Result<Self, Self::Error> {
        Ok(Loan {
            id: row.id,
            user_id: row.user_id,
            amount: parse_decimal("amount", &row.amount)?,
            annual_interest_rate: parse_decimal(
                "annual_interest_rate",
                &row.annual_interest_rate,
            )?,
            monthly_payments: row.monthly_payments,
        })
    }
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, StoreError> {
    Decimal::from_str(value).map_err(|_| StoreError::InvalidDecimal {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_row_conversion() {
        let row = LoanRow {
            id: 1,
            user_id: 2,
            amount: "500000".into(),
            annual_interest_rate: "0.06".into(),
            monthly_payments: 360,
        };
        let loan = Loan::try_from(row).unwrap();
        assert_eq!(loan.amount, dec!(500000));
        assert_eq!(loan.annual_interest_rate, dec!(0.06));
    }

    #[test]
    fn test_loan_row_bad_decimal() {
        let row = LoanRow {
            id: 1,
            user_id: 2,
            amount: "lots".into(),
            annual_interest_rate: "0.06".into(),
            monthly_payments: 360,
        };
        let err = Loan::try_from(row).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDecimal { ref field, .. } if field == "amount"));
    }
}
