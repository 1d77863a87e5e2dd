//! Recurring-Contribution Engine: future value of a monthly contribution
//! stream (SIP), with optional annual step-up, plus the inverse helper that
//! solves for the contribution needed to hit a target.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::breakdown::{chart_pair, metric, yearly_row, YearlyAccumulator};
use crate::compound::growth_factor_int;
use crate::rates;
use crate::types::{
    with_metadata, Breakdown, ComputationOutput, Money, ProjectionResult, Rate, YearlyRow,
};
use crate::{FincalcError, FincalcResult};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringInput {
    /// Contribution per month (year one's amount when stepping up).
    pub monthly_amount: Money,
    /// Annual rate as a percentage (12 = 12%).
    pub annual_rate_pct: Rate,
    pub years: u32,
    /// Percentage increase applied to the contribution at each anniversary,
    /// compounding year over year.
    #[serde(default)]
    pub annual_step_up_pct: Rate,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project a recurring contribution stream to maturity with a yearly
/// breakdown.
pub fn calculate_recurring(
    input: &RecurringInput,
) -> FincalcResult<ComputationOutput<ProjectionResult>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let rate = rates::monthly_rate(input.annual_rate_pct);
    let months = input.years * 12;

    let (invested, maturity, yearly) = if input.annual_step_up_pct.is_zero() {
        let invested = input.monthly_amount * Decimal::from(months);
        let maturity = input.monthly_amount * annuity_due_factor(rate, months);
        let yearly: Vec<YearlyRow> = (1..=input.years)
            .map(|year| {
                let n = year * 12;
                yearly_row(
                    year,
                    input.monthly_amount * Decimal::from(n),
                    input.monthly_amount * annuity_due_factor(rate, n),
                )
            })
            .collect();
        (invested, maturity, yearly)
    } else {
        step_up_projection(
            input.monthly_amount,
            rate,
            input.years,
            input.annual_step_up_pct / dec!(100),
        )
    };

    let returns = maturity - invested;

    let result = ProjectionResult {
        primary: metric("Maturity Value", maturity),
        secondary: vec![
            metric("Invested Amount", invested),
            metric("Estimated Returns", returns),
        ],
        breakdown: Breakdown::Yearly(yearly),
        chart: chart_pair("Invested", invested, "Returns", returns),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Recurring contribution (SIP) future value, annuity-due convention",
        &serde_json::json!({
            "monthly_amount": input.monthly_amount.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years,
            "annual_step_up_pct": input.annual_step_up_pct.to_string(),
        }),
        warnings,
        elapsed,
        result,
    ))
}

/// Monthly contribution needed to reach `target` over `years` at the given
/// rate (no step-up), ceiling-rounded to whole currency units.
pub fn required_contribution(target: Money, annual_rate_pct: Rate, years: u32) -> FincalcResult<Money> {
    if target <= Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "target".into(),
            reason: "target amount must be > 0".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "rate must be >= 0".into(),
        });
    }
    if years == 0 {
        return Err(FincalcError::InvalidInput {
            field: "years".into(),
            reason: "years must be > 0".into(),
        });
    }

    let rate = rates::monthly_rate(annual_rate_pct);
    let months = years * 12;
    let factor = annuity_due_factor(rate, months);
    if factor.is_zero() {
        return Err(FincalcError::DivisionByZero {
            context: "required_contribution annuity factor".into(),
        });
    }
    Ok((target / factor).ceil())
}

// ---------------------------------------------------------------------------
// Kernels
// ---------------------------------------------------------------------------

/// Future value of one unit contributed at the start of each month:
/// `((1+r)^n - 1) / r * (1+r)`, or `n` when the rate is zero.
fn annuity_due_factor(monthly_rate: Rate, months: u32) -> Decimal {
    if monthly_rate.is_zero() {
        return Decimal::from(months);
    }
    let factor = growth_factor_int(monthly_rate, months);
    (factor - Decimal::ONE) / monthly_rate * (Decimal::ONE + monthly_rate)
}

/// Step-up projection. The non-uniform contribution stream has no closed
/// form, so each monthly cohort is compounded forward explicitly: the value
/// after month m is `(value + contribution) * (1+r)`, with the contribution
/// stepping up at every anniversary. Yearly rows are snapshots of the
/// running totals.
fn step_up_projection(
    first_year_amount: Money,
    monthly_rate: Rate,
    years: u32,
    step_up: Rate,
) -> (Money, Money, Vec<YearlyRow>) {
    let growth = Decimal::ONE + monthly_rate;
    let mut contribution = first_year_amount;
    let mut invested = Decimal::ZERO;
    let mut value = Decimal::ZERO;
    let mut acc = YearlyAccumulator::new();

    for month in 1..=years * 12 {
        if month > 1 && (month - 1) % 12 == 0 {
            contribution *= Decimal::ONE + step_up;
        }
        invested += contribution;
        value = (value + contribution) * growth;
        acc.snapshot(month, invested, value);
    }

    (invested, value, acc.into_rows())
}

fn validate_input(input: &RecurringInput) -> FincalcResult<()> {
    if input.monthly_amount <= Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "monthly_amount".into(),
            reason: "contribution must be > 0".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "rate must be >= 0".into(),
        });
    }
    if input.years == 0 {
        return Err(FincalcError::InvalidInput {
            field: "years".into(),
            reason: "years must be > 0".into(),
        });
    }
    if input.annual_step_up_pct < Decimal::ZERO {
        return Err(FincalcError::InvalidInput {
            field: "annual_step_up_pct".into(),
            reason: "step-up must be >= 0".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_input() -> RecurringInput {
        RecurringInput {
            monthly_amount: dec!(10_000),
            annual_rate_pct: dec!(12),
            years: 10,
            annual_step_up_pct: Decimal::ZERO,
        }
    }

    // ---------------------------------------------------------------
    // 1. Concrete scenario: 10k/month @ 12% for 10 years
    // ---------------------------------------------------------------
    #[test]
    fn test_standard_sip_scenario() {
        let result = calculate_recurring(&default_input()).unwrap();
        assert_eq!(result.result.primary.value, dec!(2_323_391));
        assert_eq!(result.result.secondary[0].value, dec!(1_200_000));
        assert_eq!(result.result.primary.formatted, "2,323,391");
    }

    // ---------------------------------------------------------------
    // 2. Zero rate: maturity equals invested
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate() {
        let mut input = default_input();
        input.annual_rate_pct = Decimal::ZERO;
        let result = calculate_recurring(&input).unwrap();
        assert_eq!(result.result.primary.value, dec!(1_200_000));
        assert_eq!(result.result.secondary[1].value, Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 3. The cohort loop agrees with the closed form when step-up is 0
    // ---------------------------------------------------------------
    #[test]
    fn test_step_up_zero_matches_closed_form() {
        let rate = rates::monthly_rate(dec!(12));
        let (invested, maturity, yearly) =
            step_up_projection(dec!(10_000), rate, 10, Decimal::ZERO);

        let closed_form = dec!(10_000) * annuity_due_factor(rate, 120);
        assert!((maturity - closed_form).abs() < Decimal::ONE);
        assert_eq!(invested, dec!(1_200_000));
        assert_eq!(yearly.len(), 10);

        // Year boundaries also agree
        let year_three = dec!(10_000) * annuity_due_factor(rate, 36);
        assert!((yearly[2].total - year_three).abs() <= Decimal::ONE);
    }

    // ---------------------------------------------------------------
    // 4. Step-up compounds multiplicatively at anniversaries
    // ---------------------------------------------------------------
    #[test]
    fn test_step_up_invested_amounts() {
        let mut input = default_input();
        input.years = 3;
        input.annual_step_up_pct = dec!(10);
        let result = calculate_recurring(&input).unwrap();

        let rows = match &result.result.breakdown {
            Breakdown::Yearly(rows) => rows,
            _ => panic!("recurring breakdown must be yearly"),
        };

        // 120k, then +132k (10k * 1.1 * 12), then +145.2k (10k * 1.21 * 12)
        assert_eq!(rows[0].invested, dec!(120_000));
        assert_eq!(rows[1].invested, dec!(252_000));
        assert_eq!(rows[2].invested, dec!(397_200));
    }

    // ---------------------------------------------------------------
    // 5. Step-up earns strictly more than the flat stream
    // ---------------------------------------------------------------
    #[test]
    fn test_step_up_beats_flat() {
        let mut stepped = default_input();
        stepped.annual_step_up_pct = dec!(10);
        let flat = calculate_recurring(&default_input()).unwrap();
        let stepped = calculate_recurring(&stepped).unwrap();
        assert!(stepped.result.primary.value > flat.result.primary.value);
    }

    // ---------------------------------------------------------------
    // 6. Yearly breakdown is monotonically non-decreasing
    // ---------------------------------------------------------------
    #[test]
    fn test_yearly_breakdown_monotonic() {
        for step_up in [Decimal::ZERO, dec!(5)] {
            let mut input = default_input();
            input.annual_step_up_pct = step_up;
            let result = calculate_recurring(&input).unwrap();
            if let Breakdown::Yearly(rows) = &result.result.breakdown {
                for pair in rows.windows(2) {
                    assert!(pair[1].invested >= pair[0].invested);
                    assert!(pair[1].returns >= pair[0].returns);
                    assert!(pair[1].total >= pair[0].total);
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // 7. Inverse: contribution needed for a 1M target
    // ---------------------------------------------------------------
    #[test]
    fn test_required_contribution() {
        // 1,000,000 / 232.339... per unit -> 4,304.05, ceiled
        assert_eq!(
            required_contribution(dec!(1_000_000), dec!(12), 10).unwrap(),
            dec!(4_305)
        );
        // Zero rate: target / months, ceiled
        assert_eq!(
            required_contribution(dec!(1_200_000), Decimal::ZERO, 10).unwrap(),
            dec!(10_000)
        );
    }

    // ---------------------------------------------------------------
    // 8. Validation
    // ---------------------------------------------------------------
    #[test]
    fn test_rejects_bad_input() {
        let mut input = default_input();
        input.monthly_amount = Decimal::ZERO;
        assert!(calculate_recurring(&input).is_err());

        let mut input = default_input();
        input.annual_step_up_pct = dec!(-5);
        assert!(calculate_recurring(&input).is_err());

        assert!(required_contribution(Decimal::ZERO, dec!(12), 10).is_err());
    }
}
