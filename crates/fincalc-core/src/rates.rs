//! Rate Normalizer: converts annual percentage rates and day/month/year
//! tenures into the canonical per-period rate and period count each engine
//! works in.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FincalcError;
use crate::types::Rate;
use crate::FincalcResult;

/// Days per year in the simple convention used throughout (no calendar
/// awareness; deliberately approximate).
const DAYS_PER_YEAR: Decimal = dec!(365);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Unit a tenure value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenureUnit {
    Days,
    Months,
    Years,
}

/// How many times per year interest is capitalised into principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl CompoundingFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Yearly => 1,
        }
    }
}

/// Per-month rate from an annual percentage: `pct / 12 / 100`.
pub fn monthly_rate(annual_rate_pct: Rate) -> Rate {
    annual_rate_pct / dec!(1200)
}

/// Per-period rate for a given compounding frequency: `pct / freq / 100`.
pub fn per_period_rate(annual_rate_pct: Rate, frequency: CompoundingFrequency) -> Rate {
    annual_rate_pct / (Decimal::from(frequency.periods_per_year()) * dec!(100))
}

/// Tenure in whole months for the monthly-period engines (loan, recurring).
/// Day-based tenures are not meaningful for these engines.
pub fn tenure_months(tenure: u32, unit: TenureUnit) -> FincalcResult<u32> {
    match unit {
        TenureUnit::Months => Ok(tenure),
        TenureUnit::Years => Ok(tenure * 12),
        TenureUnit::Days => Err(FincalcError::InvalidInput {
            field: "tenure_unit".into(),
            reason: "day-based tenures are not supported for monthly-period engines".into(),
        }),
    }
}

/// Tenure in (possibly fractional) years for the single-investment engines.
pub fn tenure_years(tenure: u32, unit: TenureUnit) -> Decimal {
    let t = Decimal::from(tenure);
    match unit {
        TenureUnit::Years => t,
        TenureUnit::Months => t / MONTHS_PER_YEAR,
        TenureUnit::Days => t / DAYS_PER_YEAR,
    }
}
