use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as annual percentages at the API boundary (10 = 10%).
/// Internal per-period rates are decimals (0.01 = 1% per period).
pub type Rate = Decimal;

/// A single labelled figure in a projection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    /// Whole-currency-unit value.
    pub value: Money,
    /// Display string with thousands grouping.
    pub formatted: String,
}

/// One slice of the two-bucket result chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: Money,
    /// Fixed presentation constant; the UI may override it.
    pub color: String,
}

/// A single month of an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRow {
    /// Month number (1-indexed).
    pub month: u32,
    /// Derived year tag, `ceil(month / 12)`.
    pub year: u32,
    /// Periodic payment.
    pub payment: Money,
    /// Principal component of the payment.
    pub principal: Money,
    /// Interest component of the payment.
    pub interest: Money,
    /// Outstanding balance after this month (floored at zero).
    pub balance: Money,
}

/// A single year of an investment projection.
///
/// `total = invested + returns` holds exactly for every row: invested and
/// total are rounded independently and returns is derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRow {
    /// Year number (1-indexed).
    pub year: u32,
    /// Cumulative amount put in through this year.
    pub invested: Money,
    /// Cumulative growth over the invested amount.
    pub returns: Money,
    /// Projected value at the end of this year.
    pub total: Money,
}

/// Period-by-period breakdown: monthly for loan engines, yearly for
/// investment engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "granularity", content = "rows", rename_all = "snake_case")]
pub enum Breakdown {
    Monthly(Vec<PeriodRow>),
    Yearly(Vec<YearlyRow>),
}

/// Result record shared by every projection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// The headline figure (EMI, maturity value, ...).
    pub primary: Metric,
    /// Ordered supporting figures.
    pub secondary: Vec<Metric>,
    pub breakdown: Breakdown,
    /// Exactly two buckets: principal/invested and interest/returns.
    pub chart: [ChartSlice; 2],
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
