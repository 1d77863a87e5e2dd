//! Fixed-deposit engine: one-time deposit under a configurable compounding
//! frequency, with day/month/year tenures on the simple 365-day convention.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::breakdown::{chart_pair, metric, yearly_row};
use crate::compound::{growth_factor, growth_factor_int};
use crate::rates::{self, CompoundingFrequency, TenureUnit};
use crate::types::{
    with_metadata, Breakdown, ComputationOutput, Money, ProjectionResult, Rate, YearlyRow,
};
use crate::{FincalcError, FincalcResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleInvestmentInput {
    pub principal: Money,
    /// Annual rate as a percentage (7.5 = 7.5%).
    pub annual_rate_pct: Rate,
    pub tenure: u32,
    pub tenure_unit: TenureUnit,
    pub compounding: CompoundingFrequency,
}

/// Project a fixed deposit: `M = P * (1 + r/freq/100)^(years * freq)`.
/// The period count may be fractional for day- or month-based tenures.
pub fn calculate_single_investment(
    input: &SingleInvestmentInput,
) -> FincalcResult<ComputationOutput<ProjectionResult>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let years = rates::tenure_years(input.tenure, input.tenure_unit);
    let freq = input.compounding.periods_per_year();
    let rate = rates::per_period_rate(input.annual_rate_pct, input.compounding);
    let periods = years * Decimal::from(freq);

    let maturity = input.principal * growth_factor(rate, periods);
    let interest = maturity - input.principal;

    let yearly = yearly_breakdown(input.principal, rate, freq, years, maturity);

    let result = ProjectionResult {
        primary: metric("Maturity Value", maturity),
        secondary: vec![
            metric("Principal Amount", input.principal),
            metric("Interest Earned", interest),
        ],
        breakdown: Breakdown::Yearly(yearly),
        chart: chart_pair("Principal", input.principal, "Interest", interest),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed deposit, compounding-frequency-aware growth",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "tenure": input.tenure,
            "tenure_unit": input.tenure_unit,
            "compounding_periods_per_year": freq,
        }),
        warnings,
        elapsed,
        result,
    ))
}

/// One row per completed year; a tenure that is not a whole number of years
/// gets a final row at maturity tagged with the ceiling year.
fn yearly_breakdown(
    principal: Money,
    rate_per_period: Rate,
    freq: u32,
    years: Decimal,
    maturity: Money,
) -> Vec<YearlyRow> {
    let whole_years = years.floor().to_u32().unwrap_or(0);
    let mut rows: Vec<YearlyRow> = (1..=whole_years)
        .map(|year| {
            yearly_row(
                year,
                principal,
                principal * growth_factor_int(rate_per_period, year * freq),
            )
        })
        .collect();

    if !years.fract().is_zero() || whole_years == 0 {
        rows.push(yearly_row(whole_years + 1, principal, maturity));
    }

    rows
}

fn validate_input(input: &SingleInvestmentInput) -> FincalcResult<()> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn default_input() -> SingleInvestmentInput {
        SingleInvestmentInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(7.5),
            tenure: 12,
            tenure_unit: TenureUnit::Months,
            compounding: CompoundingFrequency::Quarterly,
        }
    }

    // ---------------------------------------------------------------
    // 1. Concrete scenario: 100k @ 7.5%, 12 months, quarterly
    // ---------------------------------------------------------------
    #[test]
    fn test_fd_quarterly_scenario() {
        let result = calculate_single_investment(&default_input()).unwrap();
        // 100,000 * (1.01875)^4 = 107,713.59
        assert_eq!(result.result.primary.value, dec!(107_714));
        assert_eq!(result.result.secondary[1].value, dec!(7_714));
    }

    // ---------------------------------------------------------------
    // 2. Zero rate: maturity equals principal for any tenure/frequency
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate() {
        for (tenure, unit) in [
            (500, TenureUnit::Days),
            (18, TenureUnit::Months),
            (5, TenureUnit::Years),
        ] {
            let input = SingleInvestmentInput {
                principal: dec!(100_000),
                annual_rate_pct: Decimal::ZERO,
                tenure,
                tenure_unit: unit,
                compounding: CompoundingFrequency::Monthly,
            };
            let result = calculate_single_investment(&input).unwrap();
            assert_eq!(result.result.primary.value, dec!(100_000));
        }
    }

    // ---------------------------------------------------------------
    // 3. Day tenures produce fractional periods on the 365 convention
    // ---------------------------------------------------------------
    #[test]
    fn test_day_tenure() {
        let input = SingleInvestmentInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(7.5),
            tenure: 365,
            tenure_unit: TenureUnit::Days,
            compounding: CompoundingFrequency::Quarterly,
        };
        let result = calculate_single_investment(&input).unwrap();
        // 365 days = exactly one year = 4 quarters
        assert_eq!(result.result.primary.value, dec!(107_714));

        // A half year earns less than a full year
        let input = SingleInvestmentInput {
            tenure: 183,
            ..input
        };
        let half = calculate_single_investment(&input).unwrap();
        assert!(half.result.primary.value < dec!(107_714));
        assert!(half.result.primary.value > dec!(100_000));
    }

    // ---------------------------------------------------------------
    // 4. Yearly breakdown covers whole years plus a partial tail
    // ---------------------------------------------------------------
    #[test]
    fn test_yearly_breakdown_partial_tail() {
        let input = SingleInvestmentInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(7.5),
            tenure: 30,
            tenure_unit: TenureUnit::Months,
            compounding: CompoundingFrequency::Quarterly,
        };
        let result = calculate_single_investment(&input).unwrap();
        let rows = match &result.result.breakdown {
            Breakdown::Yearly(rows) => rows,
            _ => panic!("fd breakdown must be yearly"),
        };

        // Years 1 and 2 completed, partial year 3 at maturity
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].year, 3);
        assert_eq!(rows[2].total, result.result.primary.value);
        for pair in rows.windows(2) {
            assert!(pair[1].total > pair[0].total);
        }
    }

    // ---------------------------------------------------------------
    // 5. Higher compounding frequency earns at least as much
    // ---------------------------------------------------------------
    #[test]
    fn test_frequency_ordering() {
        let base = SingleInvestmentInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(8),
            tenure: 3,
            tenure_unit: TenureUnit::Years,
            compounding: CompoundingFrequency::Yearly,
        };
        let yearly = calculate_single_investment(&base).unwrap();
        let monthly = calculate_single_investment(&SingleInvestmentInput {
            compounding: CompoundingFrequency::Monthly,
            ..base
        })
        .unwrap();
        assert!(monthly.result.primary.value > yearly.result.primary.value);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut input = default_input();
        input.tenure = 0;
        assert!(calculate_single_investment(&input).is_err());

        let mut input = default_input();
        input.annual_rate_pct = dec!(-1);
        assert!(calculate_single_investment(&input).is_err());
    }
}
