use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LoanLedgerError {
    #[error("Invalid loan parameters: {field} — {reason}")]
    InvalidLoanParameters { field: String, reason: String },

    #[error("Loan {loan_id} is not owned by user {source_user_id}")]
    OwnershipMismatch { loan_id: i64, source_user_id: i64 },
}

impl LoanLedgerError {
    pub fn invalid(field: &str, reason: &str) -> Self {
        LoanLedgerError::InvalidLoanParameters {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
