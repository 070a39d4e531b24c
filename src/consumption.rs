use std::ops::RangeInclusive;

use bon::Builder;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{ensure_within, energy::KilowattHours, volume::CubicMeters},
};

/// Yearly household consumption, shared by all the compared contracts.
#[must_use]
#[derive(Copy, Clone, Debug, Builder, Serialize)]
pub struct Consumption {
    pub gas: CubicMeters,

    /// Electricity consumed at the normal rate.
    pub normal: KilowattHours,

    /// Electricity consumed at the low rate.
    pub low: KilowattHours,

    /// Electricity fed into the grid by solar panels («teruglevering»).
    #[builder(default = KilowattHours::ZERO)]
    pub feed_in: KilowattHours,
}

impl Consumption {
    pub const GAS_RANGE: RangeInclusive<f64> = 0.0..=2500.0;
    pub const NORMAL_RANGE: RangeInclusive<f64> = 0.0..=3500.0;
    pub const LOW_RANGE: RangeInclusive<f64> = 0.0..=3500.0;
    pub const FEED_IN_RANGE: RangeInclusive<f64> = 0.0..=4000.0;

    pub fn validate(&self) -> Result {
        ensure_within("yearly gas consumption", self.gas.0, &Self::GAS_RANGE)?;
        ensure_within("yearly normal-rate consumption", self.normal.0, &Self::NORMAL_RANGE)?;
        ensure_within("yearly low-rate consumption", self.low.0, &Self::LOW_RANGE)?;
        ensure_within("yearly feed-in", self.feed_in.0, &Self::FEED_IN_RANGE)?;
        Ok(())
    }

    pub fn total_electricity(&self) -> KilowattHours {
        self.normal + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_in_defaults_to_zero() {
        let consumption = Consumption::builder()
            .gas(CubicMeters(1000.0))
            .normal(KilowattHours(2000.0))
            .low(KilowattHours(1500.0))
            .build();
        assert_eq!(consumption.feed_in, KilowattHours::ZERO);
        assert_eq!(consumption.total_electricity(), KilowattHours(3500.0));
    }

    #[test]
    fn test_validate_ok() {
        Consumption::builder()
            .gas(CubicMeters(2500.0))
            .normal(KilowattHours(3500.0))
            .low(KilowattHours(0.0))
            .feed_in(KilowattHours(4000.0))
            .build()
            .validate()
            .unwrap();
    }

    #[test]
    fn test_validate_out_of_range() {
        let error = Consumption::builder()
            .gas(CubicMeters(100.0))
            .normal(KilowattHours(100.0))
            .low(KilowattHours(100.0))
            .feed_in(KilowattHours(4000.5))
            .build()
            .validate()
            .unwrap_err();
        assert!(error.to_string().starts_with("yearly feed-in"));
    }

    #[test]
    fn test_validate_negative() {
        assert!(
            Consumption::builder()
                .gas(CubicMeters(-1.0))
                .normal(KilowattHours::ZERO)
                .low(KilowattHours::ZERO)
                .build()
                .validate()
                .is_err()
        );
    }
}
