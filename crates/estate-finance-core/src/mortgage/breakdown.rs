//! Fixed-rate mortgage breakdown for a single property purchase.
//!
//! Computes the financed amount, the level monthly payment, and how the
//! *first* payment splits between principal and interest. This is a
//! single-period snapshot: balances are not rolled forward, so no schedule
//! is produced. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EstateFinanceError;
use crate::mortgage::bounds::MortgageBounds;
use crate::time_value::annuity_payment;
use crate::types::{with_metadata, ComputationOutput, Currency, Money, Percent, Rate};
use crate::EstateFinanceResult;

const MONTHS_PER_YEAR: u32 = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Borrower-facing inputs, as entered on a listing's mortgage widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Asking price of the property
    pub property_price: Money,
    /// Amount paid upfront
    pub down_payment: Money,
    /// Repayment term in whole years
    pub tenure_years: u32,
    /// Nominal annual interest rate as a percentage (18 = 18%)
    pub annual_interest_rate_percent: Percent,
    /// Listing currency, echoed for display
    #[serde(default)]
    pub currency: Currency,
}

/// Result of a mortgage breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageBreakdown {
    /// Financed amount = price - down payment, floored at zero
    pub loan_amount: Money,
    /// Down payment after clamping to [0, price]
    pub down_payment: Money,
    /// Level monthly payment
    pub monthly_payment: Money,
    /// Principal share of the first payment
    pub principal_payment: Money,
    /// Interest share of the first payment
    pub interest_payment: Money,
    /// Periodic rate = annual percent / 100 / 12
    pub monthly_rate: Rate,
    /// tenure_years * 12
    pub number_of_payments: u32,
    /// monthly_payment * number_of_payments
    pub total_repayment: Money,
    /// total_repayment - loan_amount
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the mortgage breakdown for one set of inputs.
///
/// Price and down payment are floored at zero and the down payment is capped
/// at the price. Tenure and rate are used as given; callers enforce the
/// slider ranges (see [`MortgageBounds::clamp`]). A zero tenure has no
/// meaningful payment and is rejected.
pub fn compute_breakdown(
    property_price: Money,
    down_payment: Money,
    tenure_years: u32,
    annual_interest_rate_percent: Percent,
) -> EstateFinanceResult<MortgageBreakdown> {
    if tenure_years == 0 {
        return Err(EstateFinanceError::InvalidInput {
            field: "tenure_years".into(),
            reason: "Tenure must be at least 1 year".into(),
        });
    }

    let property_price = property_price.max(Decimal::ZERO);
    let down_payment = down_payment.max(Decimal::ZERO).min(property_price);
    let loan_amount = (property_price - down_payment).max(Decimal::ZERO);

    let monthly_rate = annual_interest_rate_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR);
    let number_of_payments = tenure_years.checked_mul(MONTHS_PER_YEAR).ok_or_else(|| {
        EstateFinanceError::InvalidInput {
            field: "tenure_years".into(),
            reason: format!("Tenure of {tenure_years} years overflows the payment count"),
        }
    })?;

    let monthly_payment = annuity_payment(monthly_rate, number_of_payments, loan_amount)?;

    let interest_payment = loan_amount * monthly_rate;
    let principal_payment = (monthly_payment - interest_payment).max(Decimal::ZERO);

    let total_repayment = monthly_payment
        .checked_mul(Decimal::from(number_of_payments))
        .ok_or_else(|| {
            EstateFinanceError::FinancialImpossibility(
                "total repayment exceeds decimal range".into(),
            )
        })?;
    let total_interest = total_repayment - loan_amount;

    Ok(MortgageBreakdown {
        loan_amount,
        down_payment,
        monthly_payment,
        principal_payment,
        interest_payment,
        monthly_rate,
        number_of_payments,
        total_repayment,
        total_interest,
    })
}

/// Compute a breakdown and wrap it in the standard output envelope, checking
/// tenure and rate against the default slider bounds.
pub fn calculate_mortgage(
    input: &MortgageInput,
) -> EstateFinanceResult<ComputationOutput<MortgageBreakdown>> {
    calculate_mortgage_with_bounds(input, &MortgageBounds::default())
}

/// As [`calculate_mortgage`], with caller-supplied advisory bounds.
///
/// Out-of-range tenure or rate only produces warnings; the figures are still
/// computed from the values as given.
pub fn calculate_mortgage_with_bounds(
    input: &MortgageInput,
    bounds: &MortgageBounds,
) -> EstateFinanceResult<ComputationOutput<MortgageBreakdown>> {
    let start = Instant::now();
    let mut warnings = clamping_warnings(input);
    warnings.extend(bounds.check(input));

    let breakdown = compute_breakdown(
        input.property_price,
        input.down_payment,
        input.tenure_years,
        input.annual_interest_rate_percent,
    )?;

    if breakdown.loan_amount.is_zero() {
        warnings.push("Nothing is financed; down payment covers the full price".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Fixed-Rate Mortgage Breakdown (annuity, first-period split)",
        input,
        warnings,
        elapsed,
        breakdown,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn clamping_warnings(input: &MortgageInput) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.property_price < Decimal::ZERO {
        warnings.push(format!(
            "Property price {} is negative; treated as 0",
            input.property_price
        ));
    }
    if input.down_payment < Decimal::ZERO {
        warnings.push(format!(
            "Down payment {} is negative; treated as 0",
            input.down_payment
        ));
    }

    let price = input.property_price.max(Decimal::ZERO);
    if input.down_payment > price {
        warnings.push(format!(
            "Down payment {} exceeds property price {}; capped at the price",
            input.down_payment, price
        ));
    }

    warnings
}
