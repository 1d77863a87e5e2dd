//! Breakdown Aggregator: whole-unit rounding at the API boundary, display
//! formatting, two-bucket chart construction, and yearly rollup of monthly
//! cohort snapshots.
//!
//! All intermediate engine math keeps full Decimal precision; every monetary
//! value passes through [`round_unit`] exactly once, at the point it enters
//! a result record.

use rust_decimal::RoundingStrategy;

use crate::types::{ChartSlice, Metric, Money, YearlyRow};

/// Chart colour for the principal/invested bucket.
pub const PRINCIPAL_COLOR: &str = "#3b82f6";

/// Chart colour for the interest/returns bucket.
pub const RETURNS_COLOR: &str = "#22c55e";

/// Round to the nearest whole currency unit, half away from zero.
pub fn round_unit(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Display string for a whole-unit amount with thousands grouping.
pub fn format_amount(value: Money) -> String {
    let rounded = round_unit(value);
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let body: String = grouped.chars().rev().collect();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{body}")
    } else {
        body
    }
}

/// Build a labelled metric, rounding and formatting the value.
pub fn metric(label: &str, value: Money) -> Metric {
    let rounded = round_unit(value);
    Metric {
        label: label.to_string(),
        value: rounded,
        formatted: format_amount(rounded),
    }
}

/// Build the two chart buckets shared by every engine.
pub fn chart_pair(
    principal_label: &str,
    principal: Money,
    returns_label: &str,
    returns: Money,
) -> [ChartSlice; 2] {
    [
        ChartSlice {
            label: principal_label.to_string(),
            value: round_unit(principal),
            color: PRINCIPAL_COLOR.to_string(),
        },
        ChartSlice {
            label: returns_label.to_string(),
            value: round_unit(returns),
            color: RETURNS_COLOR.to_string(),
        },
    ]
}

/// Build a yearly row from unrounded cumulative figures.
///
/// Invested and total round independently; returns is derived from the
/// rounded pair so `total = invested + returns` holds exactly.
pub fn yearly_row(year: u32, invested: Money, total: Money) -> YearlyRow {
    let invested = round_unit(invested);
    let total = round_unit(total);
    YearlyRow {
        year,
        invested,
        returns: total - invested,
        total,
    }
}

/// Rolls monthly cohort snapshots into yearly rows. Fed once per month by
/// engines that have no closed form (step-up SIP); emits a row at each
/// 12-month boundary.
#[derive(Debug, Default)]
pub struct YearlyAccumulator {
    rows: Vec<YearlyRow>,
}

impl YearlyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the running totals after `month` payments (1-indexed).
    pub fn snapshot(&mut self, month: u32, invested: Money, total: Money) {
        if month % 12 == 0 {
            self.rows.push(yearly_row(month / 12, invested, total));
        }
    }

    pub fn into_rows(self) -> Vec<YearlyRow> {
        self.rows
    }
}
