//! Lumpsum engine: one-time deposit compounded annually, with a yearly
//! breakdown where the invested amount stays constant.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::breakdown::{chart_pair, metric, yearly_row};
use crate::compound::growth_factor_int;
use crate::types::{with_metadata, Breakdown, ComputationOutput, Money, ProjectionResult, Rate};
use crate::{FincalcError, FincalcResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpsumInput {
    pub principal: Money,
    /// Annual rate as a percentage (12 = 12%).
    pub annual_rate_pct: Rate,
    pub years: u32,
}

/// Project a one-time deposit: `M = P * (1 + r/100)^years`.
pub fn calculate_lumpsum(input: &LumpsumInput) -> FincalcResult<ComputationOutput<ProjectionResult>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let annual_rate = input.annual_rate_pct / dec!(100);
    let maturity = input.principal * growth_factor_int(annual_rate, input.years);
    let returns = maturity - input.principal;

    let yearly = (1..=input.years)
        .map(|year| {
            yearly_row(
                year,
                input.principal,
                input.principal * growth_factor_int(annual_rate, year),
            )
        })
        .collect();

    let result = ProjectionResult {
        primary: metric("Maturity Value", maturity),
        secondary: vec![
            metric("Invested Amount", input.principal),
            metric("Estimated Returns", returns),
        ],
        breakdown: Breakdown::Yearly(yearly),
        chart: chart_pair("Invested", input.principal, "Returns", returns),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Lumpsum growth with annual compounding",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years,
        }),
        warnings,
        elapsed,
        result,
    ))
}

fn validate_input(input: &LumpsumInput) -> FincalcResult<()> {
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
    if input.years == 0 {
        return Err(FincalcError::InvalidInput {
            field: "years".into(),
            reason: "years must be > 0".into(),
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

    fn default_input() -> LumpsumInput {
        LumpsumInput {
            principal: dec!(500_000),
            annual_rate_pct: dec!(12),
            years: 10,
        }
    }

    // ---------------------------------------------------------------
    // 1. Concrete scenario: 500k @ 12% for 10 years
    // ---------------------------------------------------------------
    #[test]
    fn test_lumpsum_scenario() {
        let result = calculate_lumpsum(&default_input()).unwrap();
        // 500,000 * 1.12^10 = 1,552,924.10
        assert_eq!(result.result.primary.value, dec!(1_552_924));
        assert_eq!(result.result.secondary[1].value, dec!(1_052_924));
    }

    // ---------------------------------------------------------------
    // 2. Zero rate: maturity equals principal, returns are zero
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_rate() {
        let mut input = default_input();
        input.annual_rate_pct = Decimal::ZERO;
        let result = calculate_lumpsum(&input).unwrap();
        assert_eq!(result.result.primary.value, dec!(500_000));
        if let Breakdown::Yearly(rows) = &result.result.breakdown {
            assert!(rows.iter().all(|r| r.returns.is_zero()));
        }
    }

    // ---------------------------------------------------------------
    // 3. Yearly rows: constant invested, compounding total
    // ---------------------------------------------------------------
    #[test]
    fn test_yearly_breakdown() {
        let result = calculate_lumpsum(&default_input()).unwrap();
        let rows = match &result.result.breakdown {
            Breakdown::Yearly(rows) => rows,
            _ => panic!("lumpsum breakdown must be yearly"),
        };

        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|r| r.invested == dec!(500_000)));
        // 500,000 * 1.12 = 560,000 after year one
        assert_eq!(rows[0].total, dec!(560_000));
        assert_eq!(rows[9].total, result.result.primary.value);
        for pair in rows.windows(2) {
            assert!(pair[1].total > pair[0].total);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut input = default_input();
        input.years = 0;
        assert!(calculate_lumpsum(&input).is_err());

        let mut input = default_input();
        input.principal = dec!(-1);
        assert!(calculate_lumpsum(&input).is_err());
    }
}
