use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::rates::CompoundingFrequency;
use fincalc_core::single::fixed_deposit::{calculate_single_investment, SingleInvestmentInput};
use fincalc_core::single::lumpsum::{calculate_lumpsum, LumpsumInput};

use crate::commands::TenureUnitArg;
use crate::input;

/// CLI-facing mirror of the core compounding frequency.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FrequencyArg {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl From<FrequencyArg> for CompoundingFrequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Monthly => CompoundingFrequency::Monthly,
            FrequencyArg::Quarterly => CompoundingFrequency::Quarterly,
            FrequencyArg::HalfYearly => CompoundingFrequency::HalfYearly,
            FrequencyArg::Yearly => CompoundingFrequency::Yearly,
        }
    }
}

/// Arguments for the lumpsum projection
#[derive(Args)]
pub struct LumpsumArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// One-time deposit amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate of return in percent (12 = 12%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<u32>,
}

/// Arguments for the fixed-deposit projection
#[derive(Args)]
pub struct FdArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Deposit amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (7.5 = 7.5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Deposit tenure
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Unit the tenure is expressed in
    #[arg(long, value_enum, default_value = "years")]
    pub tenure_unit: TenureUnitArg,

    /// Compounding frequency
    #[arg(long, value_enum, default_value = "quarterly")]
    pub compounding: FrequencyArg,
}

pub fn run_lumpsum(args: LumpsumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let lumpsum_input: LumpsumInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LumpsumInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    let output = calculate_lumpsum(&lumpsum_input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_fd(args: FdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fd_input: SingleInvestmentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SingleInvestmentInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            tenure: args
                .tenure
                .ok_or("--tenure is required (or provide --input)")?,
            tenure_unit: args.tenure_unit.into(),
            compounding: args.compounding.into(),
        }
    };

    let output = calculate_single_investment(&fd_input)?;
    Ok(serde_json::to_value(output)?)
}
