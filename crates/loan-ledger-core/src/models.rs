//! Users, loans and the payloads that create or move them.
//!
//! Monetary and rate fields travel as JSON numbers; inside the crate they are
//! always `Decimal`.

use serde::{Deserialize, Serialize};

use crate::amortization::{compute_schedule, validate_loan_terms, ScheduleEntry};
use crate::error::LoanLedgerError;
use crate::types::{Money, Rate};
use crate::LoanLedgerResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    /// Current owner.
    pub user_id: i64,
    /// Principal borrowed.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_interest_rate: Rate,
    /// Term in months.
    pub monthly_payments: i64,
}

impl Loan {
    pub fn schedule(&self) -> LoanLedgerResult<Vec<ScheduleEntry>> {
        compute_schedule(self.amount, self.annual_interest_rate, self.monthly_payments)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoan {
    pub user_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_interest_rate: Rate,
    pub monthly_payments: i64,
}

impl NewLoan {
    /// Same checks the schedule applies, run before anything is stored.
    pub fn validate(&self) -> LoanLedgerResult<()> {
        validate_loan_terms(self.amount, self.annual_interest_rate, self.monthly_payments)
    }
}

/// Request to hand a loan from one user to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanShare {
    pub source_user_id: i64,
    pub target_user_id: i64,
    pub loan_id: i64,
}

/// Move `loan` to the share's target user.
///
/// Fails with `OwnershipMismatch`, leaving the loan untouched, unless the
/// share names this loan and its current owner as the source.
pub fn reassign_owner(loan: &mut Loan, share: &LoanShare) -> LoanLedgerResult<()> {
    if share.loan_id != loan.id || loan.user_id != share.source_user_id {
        return Err(LoanLedgerError::OwnershipMismatch {
            loan_id: share.loan_id,
            source_user_id: share.source_user_id,
        });
    }
    loan.user_id = share.target_user_id;
    Ok(())
}
