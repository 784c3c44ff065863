use async_trait::async_trait;
use loan_ledger_core::{Loan, NewLoan, NewUser, User};

use crate::error::StoreResult;

/// Persistence boundary for users and loans.
///
/// Implementations assign ids on create and report missing records as
/// `StoreError::NotFound`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_user(&self, user: &NewUser) -> StoreResult<User>;

    async fn get_user(&self, id: i64) -> StoreResult<User>;

    async fn list_users(&self) -> StoreResult<Vec<User>>;

    async fn create_loan(&self, loan: &NewLoan) -> StoreResult<Loan>;

    async fn get_loan(&self, id: i64) -> StoreResult<Loan>;

    /// Loans currently owned by `user_id`, oldest first.
    async fn list_loans(&self, user_id: i64) -> StoreResult<Vec<Loan>>;

    /// Overwrite a stored loan, returning it as persisted.
    async fn update_loan(&self, loan: &Loan) -> StoreResult<Loan>;
}
