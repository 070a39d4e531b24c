quantity!(
    /// Euros.
    Cost, via: f64, suffix: "€", precision: 2
);

impl Cost {
    pub const ONE_CENT: Self = Self(0.01);

    /// Round the cost to whole cents, the way it is displayed.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}
