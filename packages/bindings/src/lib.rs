use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Projection engines
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::loan::emi::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::loan::emi::calculate_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_recurring(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::recurring::sip::RecurringInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::recurring::sip::calculate_recurring(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_lumpsum(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::single::lumpsum::LumpsumInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::single::lumpsum::calculate_lumpsum(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_single_investment(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::single::fixed_deposit::SingleInvestmentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::single::fixed_deposit::calculate_single_investment(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Inverse helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct AffordablePrincipalInput {
    target_emi: Decimal,
    annual_rate_pct: Decimal,
    months: u32,
}

#[napi]
pub fn affordable_principal(input_json: String) -> NapiResult<String> {
    let input: AffordablePrincipalInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let principal = fincalc_core::loan::inverse::affordable_principal(
        input.target_emi,
        input.annual_rate_pct,
        input.months,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&principal).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct RequiredTenureInput {
    principal: Decimal,
    emi: Decimal,
    annual_rate_pct: Decimal,
}

#[napi]
pub fn required_tenure(input_json: String) -> NapiResult<String> {
    let input: RequiredTenureInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let months = fincalc_core::loan::inverse::required_tenure(
        input.principal,
        input.emi,
        input.annual_rate_pct,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&months).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct RequiredContributionInput {
    target: Decimal,
    annual_rate_pct: Decimal,
    years: u32,
}

#[napi]
pub fn required_contribution(input_json: String) -> NapiResult<String> {
    let input: RequiredContributionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let contribution = fincalc_core::recurring::sip::required_contribution(
        input.target,
        input.annual_rate_pct,
        input.years,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&contribution).map_err(to_napi_error)
}
