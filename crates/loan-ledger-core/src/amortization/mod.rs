pub mod schedule;
pub mod summary;

pub use schedule::{
    amortize, compute_schedule, validate_loan_terms, AmortizationInput, AmortizationOutput,
    ScheduleEntry,
};
pub use summary::{summarize, summarize_loan, LoanSummary, LoanSummaryInput};
