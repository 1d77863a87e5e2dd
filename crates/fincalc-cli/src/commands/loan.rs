use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use fincalc_core::loan::emi::{calculate_loan, LoanInput};
use fincalc_core::loan::inverse;

use crate::commands::TenureUnitArg;
use crate::input;

/// Arguments for the EMI projection
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (10 = 10%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan tenure
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Unit the tenure is expressed in
    #[arg(long, value_enum, default_value = "years")]
    pub tenure_unit: TenureUnitArg,
}

/// Arguments for the affordable-principal inversion
#[derive(Args)]
pub struct AffordablePrincipalArgs {
    /// Target monthly EMI
    #[arg(long)]
    pub emi: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in months
    #[arg(long)]
    pub months: u32,
}

/// Arguments for the required-tenure inversion
#[derive(Args)]
pub struct RequiredTenureArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Fixed monthly EMI
    #[arg(long)]
    pub emi: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            tenure: args
                .tenure
                .ok_or("--tenure is required (or provide --input)")?,
            tenure_unit: args.tenure_unit.into(),
        }
    };

    let output = calculate_loan(&loan_input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_affordable_principal(
    args: AffordablePrincipalArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let principal = inverse::affordable_principal(args.emi, args.rate, args.months)?;
    Ok(json!({
        "result": { "affordable_principal": principal },
        "methodology": "Algebraic inverse of the EMI annuity formula",
    }))
}

pub fn run_required_tenure(args: RequiredTenureArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let months = inverse::required_tenure(args.principal, args.emi, args.rate)?;
    Ok(json!({
        "result": { "required_tenure_months": months },
        "methodology": "n = ln(EMI / (EMI - P*r)) / ln(1+r), ceiling-rounded",
    }))
}
