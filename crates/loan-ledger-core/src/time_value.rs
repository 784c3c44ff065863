use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanLedgerError;
use crate::types::{Money, Rate};
use crate::LoanLedgerResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Nominal annual rate converted to the monthly periodic rate.
pub fn monthly_rate(annual_rate: Rate) -> Rate {
    annual_rate / MONTHS_PER_YEAR
}

/// Compounding factor (1 + rate)^nper, or `None` past the decimal range.
pub fn compound_factor(rate: Rate, nper: u32) -> Option<Decimal> {
    (Decimal::ONE + rate).checked_powu(u64::from(nper))
}

/// Discount factor (1 + rate)^-nper. Underflows to zero instead of failing.
pub fn discount_factor(rate: Rate, nper: u32) -> Decimal {
    (Decimal::ONE / (Decimal::ONE + rate))
        .checked_powu(u64::from(nper))
        .unwrap_or(Decimal::ZERO)
}

/// Level payment that retires `present_value` over `nper` periods.
///
/// Uses the closed-form annuity payment `P / (((1+r)^n - 1) / (r(1+r)^n))`.
/// A zero rate falls back to straight-line `P / n`. Once `(1+r)^n` leaves the
/// decimal range the annuity factor has converged to `1/r` and the payment is
/// `P * r`.
pub fn level_payment(rate: Rate, nper: u32, present_value: Money) -> LoanLedgerResult<Money> {
    if nper == 0 {
        return Err(LoanLedgerError::invalid(
            "nper",
            "Number of periods must be > 0",
        ));
    }

    let straight_line = present_value / Decimal::from(nper);
    if rate.is_zero() {
        return Ok(straight_line);
    }

    let annuity_factor = compound_factor(rate, nper).and_then(|factor| {
        rate.checked_mul(factor)
            .map(|denominator| (factor - Decimal::ONE) / denominator)
    });

    match annuity_factor {
        None => Ok(present_value * rate),
        // rate below decimal resolution
        Some(af) if af.is_zero() => Ok(straight_line),
        Some(af) => Ok(present_value / af),
    }
}
