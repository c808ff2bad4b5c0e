use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EstateFinanceError;
use crate::mortgage::breakdown::MortgageInput;
use crate::types::Percent;
use crate::EstateFinanceResult;

/// Slider ranges the listing page enforces before asking for a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageBounds {
    pub min_tenure_years: u32,
    pub max_tenure_years: u32,
    pub min_rate_percent: Percent,
    pub max_rate_percent: Percent,
}

impl Default for MortgageBounds {
    fn default() -> Self {
        Self {
            min_tenure_years: 1,
            max_tenure_years: 30,
            min_rate_percent: Decimal::ZERO,
            max_rate_percent: dec!(30),
        }
    }
}

impl MortgageBounds {
    /// Reject bounds that cannot describe a usable slider range.
    pub fn validate(&self) -> EstateFinanceResult<()> {
        if self.min_tenure_years < 1 {
            return Err(EstateFinanceError::InvalidInput {
                field: "min_tenure_years".into(),
                reason: "Minimum tenure must be at least 1 year".into(),
            });
        }
        if self.min_tenure_years > self.max_tenure_years {
            return Err(EstateFinanceError::InvalidInput {
                field: "max_tenure_years".into(),
                reason: format!(
                    "Maximum tenure {} is below minimum {}",
                    self.max_tenure_years, self.min_tenure_years
                ),
            });
        }
        if self.min_rate_percent < Decimal::ZERO {
            return Err(EstateFinanceError::InvalidInput {
                field: "min_rate_percent".into(),
                reason: "Minimum rate must be non-negative".into(),
            });
        }
        if self.min_rate_percent > self.max_rate_percent {
            return Err(EstateFinanceError::InvalidInput {
                field: "max_rate_percent".into(),
                reason: format!(
                    "Maximum rate {}% is below minimum {}%",
                    self.max_rate_percent, self.min_rate_percent
                ),
            });
        }
        Ok(())
    }

    /// Pull every field into range, the way the sliders would.
    ///
    /// Never panics. Inverted bounds (which [`validate`](Self::validate)
    /// rejects) resolve to the maximum.
    pub fn clamp(&self, input: &MortgageInput) -> MortgageInput {
        let property_price = input.property_price.max(Decimal::ZERO);
        MortgageInput {
            property_price,
            down_payment: input.down_payment.max(Decimal::ZERO).min(property_price),
            tenure_years: input
                .tenure_years
                .max(self.min_tenure_years)
                .min(self.max_tenure_years),
            annual_interest_rate_percent: input
                .annual_interest_rate_percent
                .max(self.min_rate_percent)
                .min(self.max_rate_percent),
            currency: input.currency.clone(),
        }
    }

    /// Advisory warnings for tenure/rate outside the range.
    pub fn check(&self, input: &MortgageInput) -> Vec<String> {
        let mut warnings = Vec::new();

        if input.tenure_years < self.min_tenure_years || input.tenure_years > self.max_tenure_years
        {
            warnings.push(format!(
                "Tenure of {} years is outside the supported {}-{} year range",
                input.tenure_years, self.min_tenure_years, self.max_tenure_years
            ));
        }

        let rate = input.annual_interest_rate_percent;
        if rate < self.min_rate_percent || rate > self.max_rate_percent {
            warnings.push(format!(
                "Annual interest rate of {}% is outside the supported {}-{}% range",
                rate, self.min_rate_percent, self.max_rate_percent
            ));
        }

        warnings
    }
}
