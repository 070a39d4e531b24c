use std::ops::Div;

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 0);

impl Div<Self> for KilowattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
