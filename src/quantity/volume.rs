quantity!(
    /// Gas volume.
    CubicMeters, via: f64, suffix: "m³", precision: 0
);
