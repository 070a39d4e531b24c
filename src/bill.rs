use serde::Serialize;

use crate::{
    consumption::Consumption,
    contract::Contract,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Yearly gas network charge.
pub const GAS_BASE_CHARGE: Cost = Cost(240.17);

/// Yearly electricity network charge.
pub const ELECTRICITY_NETWORK_CHARGE: Cost = Cost(346.39);

/// Yearly energy tax reduction («vermindering energiebelasting»).
pub const ENERGY_TAX_REDUCTION: Cost = Cost(596.86);

/// Defines how the netted feed-in is subtracted from the low-rate consumption.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NettingMode {
    /// Subtract the low-rate share of the netted feed-in from the **normal-rate** volume.
    #[default]
    Legacy,

    /// Subtract the low-rate share of the netted feed-in from the low-rate volume.
    Proportional,
}

/// Offsetting of the fed-in electricity against the consumption («saldering»).
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Netting {
    pub total_consumption: KilowattHours,

    /// Feed-in beyond the total consumption, paid out at the feed-in price.
    pub excess_feed_in: KilowattHours,

    /// Feed-in offset against the consumption.
    pub netted_feed_in: KilowattHours,

    /// Normal-rate part of the total consumption, `1.0` when nothing is consumed.
    pub normal_share: f64,

    /// Billable normal-rate consumption.
    pub net_normal: KilowattHours,

    /// Billable low-rate consumption.
    pub net_low: KilowattHours,
}

impl Netting {
    pub fn new(consumption: &Consumption, mode: NettingMode) -> Self {
        let total_consumption = consumption.total_electricity();
        let excess_feed_in = (consumption.feed_in - total_consumption).max(KilowattHours::ZERO);
        let netted_feed_in = total_consumption.min(consumption.feed_in);
        let normal_share = if total_consumption > KilowattHours::ZERO {
            consumption.normal / total_consumption
        } else {
            1.0
        };
        let net_normal =
            (consumption.normal - netted_feed_in * normal_share).max(KilowattHours::ZERO);
        let low_basis = match mode {
            NettingMode::Legacy => consumption.normal,
            NettingMode::Proportional => consumption.low,
        };
        let net_low = (low_basis - netted_feed_in * (1.0 - normal_share)).max(KilowattHours::ZERO);
        Self { total_consumption, excess_feed_in, netted_feed_in, normal_share, net_normal, net_low }
    }
}

/// Estimated yearly bill of a single contract.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Bill {
    pub gas: Cost,
    pub electricity: Cost,
    pub total: Cost,
    pub monthly_payment: Cost,
    pub netting: Netting,
}

impl Bill {
    pub fn calculate(consumption: &Consumption, contract: &Contract, mode: NettingMode) -> Self {
        let gas = GAS_BASE_CHARGE
            + contract.gas.monthly_fee * 12.0
            + consumption.gas * contract.gas.price_per_cubic_meter;

        let netting = Netting::new(consumption, mode);
        let pricing = &contract.electricity;
        let electricity = ELECTRICITY_NETWORK_CHARGE - ENERGY_TAX_REDUCTION
            + pricing.monthly_fee * 12.0
            + netting.net_normal * pricing.normal_price
            + netting.net_low * pricing.low_price
            - netting.excess_feed_in * pricing.feed_in_price;

        let total = gas + electricity;
        Self { gas, electricity, total, monthly_payment: total / 12.0, netting }
    }
}
