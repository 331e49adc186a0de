//! Moving-average primitives.
//!
//! All functions take chronologically ascending values (oldest first).

/// Simple moving average of the first `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[..period].iter().sum::<f64>() / period as f64)
}

/// Exponential moving average over an ascending series.
///
/// Seeded with the SMA of the first `period` values, then a single
/// left-to-right pass with `k = 2 / (period + 1)`. The SMA seed keeps any
/// trailing-window recomputation reproducible day by day.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = sma(values, period)?;
    for p in &values[period..] {
        ema = p * k + ema * (1.0 - k);
    }
    Some(ema)
}
