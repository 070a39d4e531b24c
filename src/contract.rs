use std::ops::RangeInclusive;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        cost::Cost,
        ensure_within,
        price::{CubicMeterPrice, KilowattHourPrice},
    },
};

const UNIT_PRICE_RANGE: RangeInclusive<f64> = 0.0..=2.5;
const MONTHLY_FEE_RANGE: RangeInclusive<f64> = 0.0..=12.5;

/// Supplier contract.
#[must_use]
#[derive(Clone, Debug, Default, Builder, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contract {
    /// Free-text supplier name, may be empty.
    #[serde(default)]
    #[builder(default, into)]
    pub supplier: String,

    #[serde(default)]
    #[builder(default)]
    pub gas: GasPricing,

    #[serde(default)]
    #[builder(default)]
    pub electricity: ElectricityPricing,
}

impl Contract {
    /// Supplier name to display, falling back to the 1-based position in the comparison.
    pub fn display_name(&self, index: usize) -> String {
        let supplier = self.supplier.trim();
        if supplier.is_empty() { format!("Supplier {}", index + 1) } else { supplier.to_owned() }
    }

    pub fn validate(&self) -> Result {
        self.gas.validate()?;
        self.electricity.validate()?;
        Ok(())
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GasPricing {
    #[builder(default = CubicMeterPrice(1.25))]
    pub price_per_cubic_meter: CubicMeterPrice,

    #[builder(default = Cost(5.99))]
    pub monthly_fee: Cost,
}

impl Default for GasPricing {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GasPricing {
    pub fn validate(&self) -> Result {
        ensure_within("gas price per m³", self.price_per_cubic_meter.0, &UNIT_PRICE_RANGE)?;
        ensure_within("gas monthly fee", self.monthly_fee.0, &MONTHLY_FEE_RANGE)?;
        Ok(())
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Builder, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElectricityPricing {
    #[builder(default = KilowattHourPrice(0.40))]
    #[serde(rename = "normal_price_per_kwh")]
    pub normal_price: KilowattHourPrice,

    #[builder(default = KilowattHourPrice(0.38))]
    #[serde(rename = "low_price_per_kwh")]
    pub low_price: KilowattHourPrice,

    #[builder(default = Cost(5.99))]
    pub monthly_fee: Cost,

    /// Price paid for the electricity fed into the grid beyond the netted volume.
    #[builder(default = KilowattHourPrice(0.08))]
    #[serde(rename = "feed_in_price_per_kwh")]
    pub feed_in_price: KilowattHourPrice,
}

impl Default for ElectricityPricing {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ElectricityPricing {
    pub fn validate(&self) -> Result {
        ensure_within("electricity normal price per kWh", self.normal_price.0, &UNIT_PRICE_RANGE)?;
        ensure_within("electricity low price per kWh", self.low_price.0, &UNIT_PRICE_RANGE)?;
        ensure_within("electricity monthly fee", self.monthly_fee.0, &MONTHLY_FEE_RANGE)?;
        ensure_within("feed-in price per kWh", self.feed_in_price.0, &UNIT_PRICE_RANGE)?;
        Ok(())
    }
}
