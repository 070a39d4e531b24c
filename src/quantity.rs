#[macro_use]
mod macros;

pub mod cost;
pub mod energy;
pub mod price;
pub mod volume;

use std::ops::RangeInclusive;

use crate::prelude::*;

/// Ensure that the input value lies within the accepted range.
pub fn ensure_within(name: &str, value: f64, range: &RangeInclusive<f64>) -> Result {
    ensure!(
        range.contains(&value),
        "{name} must be within {}..={}, got {value}",
        range.start(),
        range.end(),
    );
    Ok(())
}
