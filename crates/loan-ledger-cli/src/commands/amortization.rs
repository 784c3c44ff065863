use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_ledger_core::amortization::{self, AmortizationInput, LoanSummaryInput};

use crate::input;

/// Arguments for a full amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal borrowed
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Nominal annual interest rate as a decimal (0.06 = 6%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Term in months
    #[arg(long, allow_hyphen_values = true)]
    pub months: Option<i64>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: AmortizationInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        terms_from_flags(args.amount, args.annual_rate, args.months)?
    };

    let result = amortization::amortize(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a payment summary through a given month
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal borrowed
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Nominal annual interest rate as a decimal (0.06 = 6%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Term in months
    #[arg(long, allow_hyphen_values = true)]
    pub months: Option<i64>,

    /// Month to summarize through (1-based)
    #[arg(long, allow_hyphen_values = true)]
    pub month: Option<i64>,
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let summary_input: LoanSummaryInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let month = args
            .month
            .ok_or("--month is required (or provide --input)")?;
        LoanSummaryInput {
            terms: terms_from_flags(args.amount, args.annual_rate, args.months)?,
            month,
        }
    };

    let result = amortization::summarize_loan(&summary_input)?;
    Ok(serde_json::to_value(result)?)
}

fn terms_from_flags(
    amount: Option<Decimal>,
    annual_rate: Option<Decimal>,
    months: Option<i64>,
) -> Result<AmortizationInput, Box<dyn std::error::Error>> {
    Ok(AmortizationInput {
        amount: amount.ok_or("--amount is required (or provide --input)")?,
        annual_interest_rate: annual_rate
            .ok_or("--annual-rate is required (or provide --input)")?,
        monthly_payments: months.ok_or("--months is required (or provide --input)")?,
    })
}
