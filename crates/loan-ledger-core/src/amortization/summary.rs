//! Cumulative payment summary through a target month.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::schedule::{compute_schedule, AmortizationInput, ScheduleEntry};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::LoanLedgerResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Principal paid in the target month alone.
    #[serde(with = "rust_decimal::serde::float")]
    pub principal_payment: Money,
    /// Principal paid in months 1..=target.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_principal_payment: Money,
    /// Interest paid in months 1..=target.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_interest_payment: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummaryInput {
    #[serde(flatten)]
    pub terms: AmortizationInput,
    pub month: i64,
}

/// Reduce a schedule to totals through `target_month`.
///
/// Entries are matched on their `month` field, so the schedule may arrive in
/// any order. Months outside the schedule are not an error: a target below 1
/// yields zeros, a target past the term yields the full-term totals.
pub fn summarize(schedule: &[ScheduleEntry], target_month: i64) -> LoanSummary {
    let mut summary = LoanSummary::default();

    for entry in schedule {
        let month = i64::from(entry.month);
        if month == target_month {
            summary.principal_payment = entry.principal_payment;
        }
        if month <= target_month {
            summary.total_principal_payment += entry.principal_payment;
            summary.total_interest_payment += entry.interest_payment;
        }
    }

    summary
}

/// Build the schedule for `input.terms` and summarize it through `input.month`.
pub fn summarize_loan(
    input: &LoanSummaryInput,
) -> LoanLedgerResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = compute_schedule(
        input.terms.amount,
        input.terms.annual_interest_rate,
        input.terms.monthly_payments,
    )?;

    if input.month < 1 {
        warnings.push(format!(
            "Month {} precedes the first payment; totals are zero",
            input.month
        ));
    } else if input.month > input.terms.monthly_payments {
        warnings.push(format!(
            "Month {} is past the {}-month term; totals cover the full term",
            input.month, input.terms.monthly_payments
        ));
    }

    let summary = summarize(&schedule, input.month);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Cumulative principal and interest through target month",
        &serde_json::json!({
            "amount": input.terms.amount.to_string(),
            "annual_interest_rate": input.terms.annual_interest_rate.to_string(),
            "monthly_payments": input.terms.monthly_payments,
            "month": input.month,
        }),
        warnings,
        elapsed,
        summary,
    ))
}
