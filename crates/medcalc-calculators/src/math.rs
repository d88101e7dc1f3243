/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Logistic transform `e^x / (1 + e^x)`, stable for large `|x|`.
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Logistic probability expressed as a percentage.
pub fn logistic_percent(x: f64) -> f64 {
    logistic(x) * 100.0
}
