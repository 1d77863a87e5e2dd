//! Compounding Kernel: the single source of truth for `(1 + r)^n`.
//!
//! Every engine routes its exponentiation through here so the zero-rate
//! degenerate case is handled in exactly one place.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::types::Rate;

/// Compute `(1 + rate)^periods` for a whole number of periods via iterative
/// multiplication (avoids Decimal::powd drift).
pub fn growth_factor_int(rate_per_period: Rate, periods: u32) -> Decimal {
    if rate_per_period.is_zero() || periods == 0 {
        return Decimal::ONE;
    }
    let factor = Decimal::ONE + rate_per_period;
    let mut result = Decimal::ONE;
    for _ in 0..periods {
        result *= factor;
    }
    result
}

/// Compute `(1 + rate)^periods` where the period count may be fractional
/// (day-based FD tenures). Whole counts take the iterative path.
pub fn growth_factor(rate_per_period: Rate, periods: Decimal) -> Decimal {
    if rate_per_period.is_zero() || periods.is_zero() {
        return Decimal::ONE;
    }
    match periods.fract().is_zero().then(|| periods.to_u32()).flatten() {
        Some(n) => growth_factor_int(rate_per_period, n),
        None => (Decimal::ONE + rate_per_period).powd(periods),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_rate_is_identity() {
        assert_eq!(growth_factor_int(Decimal::ZERO, 480), Decimal::ONE);
        assert_eq!(growth_factor(Decimal::ZERO, dec!(3.5)), Decimal::ONE);
    }

    #[test]
    fn test_zero_periods_is_identity() {
        assert_eq!(growth_factor_int(dec!(0.01), 0), Decimal::ONE);
        assert_eq!(growth_factor(dec!(0.01), Decimal::ZERO), Decimal::ONE);
    }

    #[test]
    fn test_integer_exponent() {
        // (1.12)^2 = 1.2544 exactly
        assert_eq!(growth_factor_int(dec!(0.12), 2), dec!(1.2544));
        // Fractional-capable path must agree on whole counts
        assert_eq!(growth_factor(dec!(0.12), dec!(2)), dec!(1.2544));
    }

    #[test]
    fn test_fractional_exponent() {
        // (1.01875)^2.5 lies strictly between ^2 and ^3
        let f = growth_factor(dec!(0.01875), dec!(2.5));
        assert!(f > growth_factor_int(dec!(0.01875), 2));
        assert!(f < growth_factor_int(dec!(0.01875), 3));
    }
}
