use crate::quantity::{cost::Cost, energy::KilowattHours, volume::CubicMeters};

quantity!(KilowattHourPrice, via: f64, suffix: "€/kWh", precision: 3);
quantity!(CubicMeterPrice, via: f64, suffix: "€/m³", precision: 3);

implement_mul!(KilowattHourPrice, KilowattHours, Cost);
implement_mul!(CubicMeterPrice, CubicMeters, Cost);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_gas_cost() {
        assert_abs_diff_eq!((CubicMeters(1000.0) * CubicMeterPrice(1.25)).0, 1250.0);
        assert_abs_diff_eq!((CubicMeterPrice(1.25) * CubicMeters(1000.0)).0, 1250.0);
    }

    #[test]
    fn test_electricity_cost() {
        assert_abs_diff_eq!((KilowattHours(2000.0) * KilowattHourPrice(0.4)).0, 800.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHourPrice(0.4).to_string(), "0.400 €/kWh");
    }
}
