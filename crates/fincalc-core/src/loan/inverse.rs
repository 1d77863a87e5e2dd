//! Inverse loan helpers: affordable principal from a target EMI, and
//! required tenure from a principal/EMI pair.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::breakdown::round_unit;
use crate::compound::growth_factor_int;
use crate::rates;
use crate::types::{Money, Rate};
use crate::{FincalcError, FincalcResult};

/// Largest principal whose EMI at the given rate and term does not exceed
/// `target_emi`. Algebraic inverse of the annuity formula:
/// `P = EMI * ((1+r)^n - 1) / (r * (1+r)^n)`.
pub fn affordable_principal(
    target_emi: Money,
    annual_rate_pct: Rate,
    months: u32,
) -> FincalcResult<Money> {
    if target_emi <= Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "target_emi".into(),
            reason: "target EMI must be > 0".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "rate must be >= 0".into(),
        });
    }
    if months == 0 {
        return Err(FincalcError::InvalidInput {
            field: "months".into(),
            reason: "term must be > 0".into(),
        });
    }

    let rate = rates::monthly_rate(annual_rate_pct);
    let n = Decimal::from(months);
    if rate.is_zero() {
        return Ok(round_unit(target_emi * n));
    }

    let factor = growth_factor_int(rate, months);
    Ok(round_unit(
        target_emi * (factor - Decimal::ONE) / (rate * factor),
    ))
}

/// Whole months needed to amortize `principal` with a fixed `emi`:
/// `n = ln(EMI / (EMI - P*r)) / ln(1+r)`, ceiling-rounded.
///
/// Undefined when `EMI <= P*r` — the payment never covers interest and the
/// loan cannot amortize.
pub fn required_tenure(principal: Money, emi: Money, annual_rate_pct: Rate) -> FincalcResult<u32> {
    if principal <= Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be > 0".into(),
        });
    }
    if emi <= Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "emi".into(),
            reason: "EMI must be > 0".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "rate must be >= 0".into(),
        });
    }

    let rate = rates::monthly_rate(annual_rate_pct);
    if rate.is_zero() {
        let n = (principal / emi).ceil();
        return n.to_u32().ok_or_else(|| FincalcError::InvalidInput {
            field: "emi".into(),
            reason: "term does not fit in whole months".into(),
        });
    }

    let monthly_interest = principal * rate;
    if emi <= monthly_interest {
        return Err(FincalcError::FinancialImpossibility(format!(
            "EMI {emi} does not exceed first-month interest {monthly_interest}; \
             the loan would never amortize"
        )));
    }

    let log_base = (Decimal::ONE + rate).ln();
    if log_base.is_zero() {
        return Err(FincalcError::DivisionByZero {
            context: "required_tenure log base".into(),
        });
    }

    let n = ((emi / (emi - monthly_interest)).ln() / log_base).ceil();
    n.to_u32().ok_or_else(|| FincalcError::InvalidInput {
        field: "emi".into(),
        reason: "term does not fit in whole months".into(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::emi::emi_payment;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // ---------------------------------------------------------------
    // 1. Round-trip: principal -> EMI -> affordable principal
    // ---------------------------------------------------------------
    #[test]
    fn test_affordable_principal_round_trip() {
        let rate = rates::monthly_rate(dec!(10));
        let emi = emi_payment(dec!(500_000), rate, 144);
        let principal = affordable_principal(emi, dec!(10), 144).unwrap();
        assert!((principal - dec!(500_000)).abs() <= Decimal::ONE);
    }

    // ---------------------------------------------------------------
    // 2. Zero-rate affordable principal is EMI * n
    // ---------------------------------------------------------------
    #[test]
    fn test_affordable_principal_zero_rate() {
        assert_eq!(
            affordable_principal(dec!(5_000), Decimal::ZERO, 24).unwrap(),
            dec!(120_000)
        );
    }

    // ---------------------------------------------------------------
    // 3. Required tenure: 500k @ 10% with a 6,000 EMI takes 143 months
    // ---------------------------------------------------------------
    #[test]
    fn test_required_tenure() {
        assert_eq!(required_tenure(dec!(500_000), dec!(6_000), dec!(10)).unwrap(), 143);
    }

    #[test]
    fn test_required_tenure_zero_rate() {
        assert_eq!(
            required_tenure(dec!(120_000), dec!(5_000), Decimal::ZERO).unwrap(),
            24
        );
        // Non-exact division rounds up
        assert_eq!(
            required_tenure(dec!(120_001), dec!(5_000), Decimal::ZERO).unwrap(),
            25
        );
    }

    // ---------------------------------------------------------------
    // 4. EMI at or below first-month interest never amortizes
    // ---------------------------------------------------------------
    #[test]
    fn test_required_tenure_impossible() {
        // First-month interest on 500k @ 10% is ~4,167
        let err = required_tenure(dec!(500_000), dec!(4_000), dec!(10)).unwrap_err();
        assert!(matches!(err, FincalcError::FinancialImpossibility(_)));
    }
}
