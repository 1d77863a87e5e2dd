//! Amortizing Loan Engine: fixed periodic payment (EMI) via the standard
//! annuity formula plus the full month-by-month amortization schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::breakdown::{chart_pair, metric, round_unit};
use crate::compound::growth_factor_int;
use crate::rates::{self, TenureUnit};
use crate::types::{
    with_metadata, Breakdown, ComputationOutput, Money, PeriodRow, ProjectionResult, Rate,
};
use crate::{FincalcError, FincalcResult};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual rate as a percentage (10 = 10%).
    pub annual_rate_pct: Rate,
    pub tenure: u32,
    pub tenure_unit: TenureUnit,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project an amortizing loan: EMI, totals, and the monthly schedule.
pub fn calculate_loan(input: &LoanInput) -> FincalcResult<ComputationOutput<ProjectionResult>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let months = rates::tenure_months(input.tenure, input.tenure_unit)?;
    let rate = rates::monthly_rate(input.annual_rate_pct);
    let emi = emi_payment(input.principal, rate, months);

    let schedule = amortization_schedule(input.principal, rate, emi, months);

    let total_payment = emi * Decimal::from(months);
    let total_interest = total_payment - input.principal;

    let result = ProjectionResult {
        primary: metric("Monthly EMI", emi),
        secondary: vec![
            metric("Principal Amount", input.principal),
            metric("Total Interest", total_interest),
            metric("Total Payment", total_payment),
        ],
        breakdown: Breakdown::Monthly(schedule),
        chart: chart_pair(
            "Principal",
            input.principal,
            "Interest",
            total_interest,
        ),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortizing loan (EMI) via annuity formula with monthly schedule",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "months": months,
        }),
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Kernel
// ---------------------------------------------------------------------------

/// Fixed periodic payment: `P * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// The formula has a removable singularity at r = 0; that case is exactly
/// `P / n`, special-cased rather than computed via limits.
pub(crate) fn emi_payment(principal: Money, monthly_rate: Rate, months: u32) -> Money {
    let n = Decimal::from(months);
    if monthly_rate.is_zero() {
        return principal / n;
    }
    let factor = growth_factor_int(monthly_rate, months);
    principal * monthly_rate * factor / (factor - Decimal::ONE)
}

/// Month-by-month interest/principal split. The balance is floored at zero
/// in the final period to absorb rounding drift.
fn amortization_schedule(
    principal: Money,
    monthly_rate: Rate,
    emi: Money,
    months: u32,
) -> Vec<PeriodRow> {
    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        let interest = balance * monthly_rate;
        let principal_part = emi - interest;
        balance = (balance - principal_part).max(Decimal::ZERO);

        rows.push(PeriodRow {
            month,
            year: (month - 1) / 12 + 1,
            payment: round_unit(emi),
            principal: round_unit(principal_part),
            interest: round_unit(interest),
            balance: round_unit(balance),
        });
    }

    rows
}

fn validate_input(input: &LoanInput) -> FincalcResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be > 0".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "rate must be >= 0".into(),
        });
    }
    if input.tenure == 0 {
        return Err(FincalcError::InvalidInput {
            field: "tenure".into(),
            reason: "tenure must be > 0".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
