use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::EstateFinanceError;
use crate::types::{Money, Rate};
use crate::EstateFinanceResult;

/// Compound growth factor `(1 + rate)^periods` via exponentiation by squaring.
///
/// Cost is logarithmic in `periods`. Overflow is reported as an error rather
/// than a panic, so pathological tenure/rate combinations surface to the caller.
pub fn compound_factor(rate: Rate, periods: u32) -> EstateFinanceResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powu(u64::from(periods))
        .ok_or(EstateFinanceError::CompoundingOverflow { rate, periods })
}

/// Level payment that fully amortises `principal` over `periods` at a
/// periodic `rate`: P * r(1+r)^n / ((1+r)^n - 1).
///
/// A zero rate has a removable singularity in the closed form, so the
/// payment falls back to straight-line division.
pub fn annuity_payment(rate: Rate, periods: u32, principal: Money) -> EstateFinanceResult<Money> {
    if periods == 0 {
        return Err(EstateFinanceError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate <= -Decimal::ONE {
        return Err(EstateFinanceError::InvalidInput {
            field: "rate".into(),
            reason: "Periodic rate must be greater than -100%".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let factor = compound_factor(rate, periods)?;
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(EstateFinanceError::DivisionByZero {
            context: "annuity payment denominator".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|n| n.checked_mul(factor))
        .and_then(|n| n.checked_div(denominator))
        .ok_or_else(|| {
            EstateFinanceError::FinancialImpossibility(format!(
                "annuity payment for principal {principal} at rate {rate} over {periods} periods is out of range"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_factor_basic() {
        assert_eq!(compound_factor(dec!(0.1), 2).unwrap(), dec!(1.21));
        assert_eq!(compound_factor(dec!(0.05), 0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_compound_factor_overflow_is_error() {
        let err = compound_factor(dec!(1.5), 10_000).unwrap_err();
        assert!(matches!(
            err,
            EstateFinanceError::CompoundingOverflow { periods: 10_000, .. }
        ));
    }

    #[test]
    fn test_compound_factor_matches_repeated_multiplication() {
        let base = dec!(1.015);
        let mut expected = Decimal::ONE;
        for _ in 0..120 {
            expected *= base;
        }
        let factor = compound_factor(dec!(0.015), 120).unwrap();
        assert!((factor - expected).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_compound_factor_max_periods_is_fast() {
        // a near-zero rate never overflows, so the full u32 range must be cheap
        let start = std::time::Instant::now();
        let factor = compound_factor(dec!(0.0000000000001), u32::MAX).unwrap();
        assert!(factor > Decimal::ONE);
        assert!(
            start.elapsed() < std::time::Duration::from_secs(1),
            "took {:?}",
            start.elapsed()
        );
    }

    #[test]
    fn test_annuity_payment_sanity() {
        // 750k at 6.5% over 30 years, expected ~4,740/mo
        let payment = annuity_payment(dec!(0.065) / dec!(12), 360, dec!(750000)).unwrap();
        assert!(
            payment > dec!(4700) && payment < dec!(4800),
            "Monthly payment {} outside expected range",
            payment
        );
    }

    #[test]
    fn test_annuity_payment_zero_rate() {
        let payment = annuity_payment(Decimal::ZERO, 360, dec!(360000)).unwrap();
        assert_eq!(payment, dec!(1000));
    }

    #[test]
    fn test_annuity_payment_zero_periods() {
        assert!(annuity_payment(dec!(0.01), 0, dec!(1000)).is_err());
    }

    #[test]
    fn test_annuity_payment_rejects_total_loss_rate() {
        assert!(annuity_payment(dec!(-1), 12, dec!(1000)).is_err());
    }
}
