use clap::Parser;

use crate::{
    consumption::Consumption,
    prelude::*,
    quantity::{energy::KilowattHours, volume::CubicMeters},
};

#[derive(Parser)]
pub struct ConsumptionArgs {
    /// Yearly gas consumption in cubic meters (0–2500).
    #[clap(long = "gas-cubic-meters", env = "GAS_CUBIC_METERS", default_value = "0")]
    pub gas: CubicMeters,

    /// Yearly normal-rate electricity consumption in kilowatt-hours (0–3500).
    #[clap(long = "normal-kilowatt-hours", env = "NORMAL_KILOWATT_HOURS", default_value = "0")]
    pub normal: KilowattHours,

    /// Yearly low-rate electricity consumption in kilowatt-hours (0–3500).
    #[clap(long = "low-kilowatt-hours", env = "LOW_KILOWATT_HOURS", default_value = "0")]
    pub low: KilowattHours,

    /// The household has solar panels.
    #[clap(long, env = "SOLAR_PANELS")]
    pub solar_panels: bool,

    /// Yearly electricity fed into the grid in kilowatt-hours (0–4000), only with solar panels.
    #[clap(long = "feed-in-kilowatt-hours", env = "FEED_IN_KILOWATT_HOURS", default_value = "0")]
    pub feed_in: KilowattHours,
}

impl ConsumptionArgs {
    pub fn to_consumption(&self) -> Consumption {
        let feed_in = if self.solar_panels {
            self.feed_in
        } else {
            if self.feed_in != KilowattHours::ZERO {
                warn!(feed_in = ?self.feed_in, "ignoring the feed-in without solar panels");
            }
            KilowattHours::ZERO
        };
        Consumption::builder()
            .gas(self.gas)
            .normal(self.normal)
            .low(self.low)
            .feed_in(feed_in)
            .build()
    }
}
