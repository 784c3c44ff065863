//! Fixed-rate amortization schedule.
//!
//! Derives the level monthly payment for a loan and splits every month of the
//! term into interest, principal and remaining balance. All arithmetic is
//! carried in `rust_decimal::Decimal`; each stored field is rounded to cents
//! (half-to-even) while the running balance keeps full precision.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanLedgerError;
use crate::time_value::{compound_factor, discount_factor, level_payment, monthly_rate};
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Rate};
use crate::LoanLedgerResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Longest supported term: 1,000 years of monthly payments.
pub const MAX_TERM_MONTHS: i64 = 12_000;
/// Largest supported principal.
pub const MAX_PRINCIPAL: Decimal = dec!(1_000_000_000_000_000);
/// Largest supported nominal annual rate (100,000,000%).
pub const MAX_ANNUAL_RATE: Decimal = dec!(1_000_000);
/// Compounding growth above which the balance recurrence would amplify
/// decimal rounding past a cent; such loans are split by discounting.
const STABLE_GROWTH_LIMIT: Decimal = dec!(1_000_000_000_000);
/// Final balances above this are flagged as rounding drift.
const RESIDUE_WARNING_THRESHOLD: Decimal = dec!(1);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based month index.
    pub month: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_payment: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub principal_payment: Money,
    /// Balance after this month's payment.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_balance: Money,
}

/// Loan terms to amortize. Field names match the persisted loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    /// Principal borrowed.
    pub amount: Money,
    /// Nominal annual rate (0.06 = 6%).
    pub annual_interest_rate: Rate,
    /// Term in months.
    pub monthly_payments: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    /// Level payment, rounded to cents.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_payment: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_interest: Money,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_principal: Money,
    pub schedule: Vec<ScheduleEntry>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reject terms the schedule cannot be built from.
pub fn validate_loan_terms(
    principal: Money,
    annual_rate: Rate,
    term_months: i64,
) -> LoanLedgerResult<()> {
    if term_months <= 0 {
        return Err(LoanLedgerError::invalid(
            "monthly_payments",
            "Term must be at least 1 month",
        ));
    }
    if term_months > MAX_TERM_MONTHS {
        return Err(LoanLedgerError::invalid(
            "monthly_payments",
            "Term cannot exceed 12000 months",
        ));
    }
    if principal <= Decimal::ZERO {
        return Err(LoanLedgerError::invalid("amount", "Principal must be positive"));
    }
    if principal > MAX_PRINCIPAL {
        return Err(LoanLedgerError::invalid(
            "amount",
            "Principal exceeds supported range",
        ));
    }
    if annual_rate < Decimal::ZERO {
        return Err(LoanLedgerError::invalid(
            "annual_interest_rate",
            "Annual rate cannot be negative",
        ));
    }
    if annual_rate > MAX_ANNUAL_RATE {
        return Err(LoanLedgerError::invalid(
            "annual_interest_rate",
            "Annual rate exceeds supported range",
        ));
    }
    Ok(())
}

/// Build the month-by-month schedule for a fixed-rate loan.
///
/// Returns exactly `term_months` entries, months `1..=term_months` in order.
/// The final remaining balance is whatever the computation leaves; a few
/// cents of drift are expected and left in place.
pub fn compute_schedule(
    principal: Money,
    annual_rate: Rate,
    term_months: i64,
) -> LoanLedgerResult<Vec<ScheduleEntry>> {
    validate_loan_terms(principal, annual_rate, term_months)?;

    let n = u32::try_from(term_months)
        .map_err(|_| LoanLedgerError::invalid("monthly_payments", "Term out of range"))?;
    let rate = monthly_rate(annual_rate);
    let payment = level_payment(rate, n, principal)?;

    let stable = matches!(compound_factor(rate, n), Some(f) if f <= STABLE_GROWTH_LIMIT);
    let mut schedule: Vec<ScheduleEntry> = Vec::with_capacity(n as usize);
    let mut balance = principal;

    for month in 1..=n {
        let (interest, principal_part) = if stable {
            let interest = balance * rate;
            (interest, payment - interest)
        } else {
            // Principal share of payment k is payment * (1+r)^-(n-k+1).
            let principal_part = payment * discount_factor(rate, n - month + 1);
            (payment - principal_part, principal_part)
        };
        balance -= principal_part;

        schedule.push(ScheduleEntry {
            month,
            interest_payment: round_money(interest),
            principal_payment: round_money(principal_part),
            remaining_balance: round_money(balance),
        });
    }

    Ok(schedule)
}

/// Schedule wrapped in the computation envelope, with payment totals.
pub fn amortize(
    input: &AmortizationInput,
) -> LoanLedgerResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = compute_schedule(
        input.amount,
        input.annual_interest_rate,
        input.monthly_payments,
    )?;

    if input.annual_interest_rate.is_zero() {
        warnings.push("Zero interest rate: straight-line amortization".into());
    }

    let n = schedule.len() as u32;
    let monthly_payment = round_money(level_payment(
        monthly_rate(input.annual_interest_rate),
        n,
        input.amount,
    )?);
    let total_interest: Money = schedule.iter().map(|e| e.interest_payment).sum();
    let total_principal: Money = schedule.iter().map(|e| e.principal_payment).sum();

    if let Some(last) = schedule.last() {
        if last.remaining_balance.abs() > RESIDUE_WARNING_THRESHOLD {
            warnings.push(format!(
                "Final remaining balance {} exceeds rounding tolerance",
                last.remaining_balance
            ));
        }
    }

    let output = AmortizationOutput {
        monthly_payment,
        total_interest,
        total_principal,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate amortization — closed-form annuity payment, monthly compounding",
        &serde_json::json!({
            "amount": input.amount.to_string(),
            "annual_interest_rate": input.annual_interest_rate.to_string(),
            "monthly_payments": input.monthly_payments,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
