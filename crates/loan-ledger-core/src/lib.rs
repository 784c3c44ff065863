pub mod amortization;
pub mod error;
pub mod models;
pub mod time_value;
pub mod types;

pub use amortization::{compute_schedule, summarize, LoanSummary, ScheduleEntry};
pub use error::LoanLedgerError;
pub use models::{reassign_owner, Loan, LoanShare, NewLoan, NewUser, User};
pub use types::*;

/// Standard result type for all loan-ledger operations
pub type LoanLedgerResult<T> = Result<T, LoanLedgerError>;
