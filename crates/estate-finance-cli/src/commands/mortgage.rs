use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use estate_finance_core::mortgage::{self, MortgageBounds, MortgageInput};
use estate_finance_core::Currency;

use crate::{config, input};

/// Arguments for a mortgage breakdown
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MortgageArgs {
    /// Asking price of the property
    #[arg(long, alias = "price")]
    pub property_price: Option<Decimal>,

    /// Amount paid upfront
    #[arg(long, alias = "down")]
    pub down_payment: Option<Decimal>,

    /// Repayment term in years
    #[arg(long, alias = "years")]
    pub tenure_years: Option<u32>,

    /// Nominal annual interest rate in percent (e.g. 18 for 18%)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Listing currency code (GHS, USD, ...)
    #[arg(long, default_value = "GHS")]
    pub currency: Currency,

    /// Clamp tenure and rate into the configured slider range first
    #[arg(long)]
    pub clamp: bool,

    /// YAML or JSON file overriding the tenure/rate bounds
    #[arg(long)]
    pub config: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bounds = config::load_bounds(args.config.as_deref())?;
    let parsed: Option<MortgageInput> = input::read_input(args.input.as_deref())?;
    let mortgage_input = resolve_input(&args, parsed, &bounds)?;

    let result = mortgage::calculate_mortgage_with_bounds(&mortgage_input, &bounds)?;
    tracing::debug!(
        monthly_payment = %result.result.monthly_payment,
        warnings = result.warnings.len(),
        "mortgage breakdown computed"
    );
    Ok(serde_json::to_value(result)?)
}

/// Parsed document wins over flags; `--clamp` is applied last.
fn resolve_input(
    args: &MortgageArgs,
    parsed: Option<MortgageInput>,
    bounds: &MortgageBounds,
) -> Result<MortgageInput, Box<dyn std::error::Error>> {
    let raw = match parsed {
        Some(parsed) => parsed,
        None => MortgageInput {
            property_price: args
                .property_price
                .ok_or("--property-price is required (or provide --input)")?,
            down_payment: args.down_payment.unwrap_or(Decimal::ZERO),
            tenure_years: args
                .tenure_years
                .ok_or("--tenure-years is required (or provide --input)")?,
            annual_interest_rate_percent: args
                .interest_rate
                .ok_or("--interest-rate is required (or provide --input)")?,
            currency: args.currency.clone(),
        },
    };

    if !args.clamp {
        return Ok(raw);
    }

    let clamped = bounds.clamp(&raw);
    if clamped != raw {
        tracing::info!(
            tenure_years = clamped.tenure_years,
            rate = %clamped.annual_interest_rate_percent,
            "inputs clamped to slider bounds"
        );
    }
    Ok(clamped)
}
