//! MACD line and signal line over daily closes.

use crate::common::math;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Minimum closes for a MACD state: the 26-day EMA plus the 9-day signal
/// seed (35 with defaults).
pub const MACD_MIN_DAYS: usize = MACD_SLOW + MACD_SIGNAL;

/// MACD and signal series from newest-first closes.
///
/// Each MACD point is recomputed from its trailing `slow`-length window
/// rather than carried incrementally, so any single day's value can be
/// reproduced in isolation without accumulated rounding. Both returned
/// series are newest-first and trimmed to equal length; both are empty when
/// history is shorter than `slow + signal_period`.
pub fn macd_series(
    closes_newest_first: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> (Vec<f64>, Vec<f64>) {
    if closes_newest_first.len() < slow + signal_period {
        return (Vec::new(), Vec::new());
    }
    let chrono: Vec<f64> = closes_newest_first.iter().rev().copied().collect();

    let mut macd_chrono = Vec::with_capacity(chrono.len() - (slow - 1));
    for i in (slow - 1)..chrono.len() {
        let w = &chrono[i + 1 - slow..=i];
        match (math::ema(w, fast), math::ema(w, slow)) {
            (Some(f), Some(s)) => macd_chrono.push(f - s),
            _ => macd_chrono.push(0.0),
        }
    }
    if macd_chrono.len() < signal_period {
        return (Vec::new(), Vec::new());
    }

    let mut signal_chrono = Vec::with_capacity(macd_chrono.len() - (signal_period - 1));
    for i in (signal_period - 1)..macd_chrono.len() {
        let w = &macd_chrono[i + 1 - signal_period..=i];
        signal_chrono.push(math::ema(w, signal_period).unwrap_or(0.0));
    }

    // The signal line starts signal_period-1 points later; drop the MACD
    // lead so index 0 of both series is the same (most recent) day.
    let macd: Vec<f64> = macd_chrono[signal_period - 1..]
        .iter()
        .rev()
        .copied()
        .collect();
    let signal: Vec<f64> = signal_chrono.iter().rev().copied().collect();
    (macd, signal)
}

/// MACD with the standard 12/26/9 periods.
pub fn macd_series_default(closes_newest_first: &[f64]) -> (Vec<f64>, Vec<f64>) {
    macd_series(closes_newest_first, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}
