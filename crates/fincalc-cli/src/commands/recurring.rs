use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use fincalc_core::recurring::sip::{self, calculate_recurring, RecurringInput};

use crate::input;

/// Arguments for the SIP projection
#[derive(Args)]
pub struct SipArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly contribution (first year's amount when stepping up)
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual rate of return in percent (12 = 12%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Annual step-up in percent, applied at each anniversary
    #[arg(long, default_value = "0")]
    pub step_up: Decimal,
}

/// Arguments for the required-contribution inversion
#[derive(Args)]
pub struct RequiredSipArgs {
    /// Target maturity amount
    #[arg(long)]
    pub target: Decimal,

    /// Annual rate of return in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Investment horizon in years
    #[arg(long)]
    pub years: u32,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let recurring_input: RecurringInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RecurringInput {
            monthly_amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            annual_step_up_pct: args.step_up,
        }
    };

    let output = calculate_recurring(&recurring_input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_required_sip(args: RequiredSipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let contribution = sip::required_contribution(args.target, args.rate, args.years)?;
    Ok(json!({
        "result": { "required_contribution": contribution },
        "methodology": "Algebraic inverse of the annuity-due future-value formula, ceiling-rounded",
    }))
}
