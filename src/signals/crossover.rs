//! MACD / signal-line relationship over the two most recent points.

use crate::indicators::momentum::{self, MACD_MIN_DAYS};
use crate::models::price::PriceRow;
use crate::models::signal::MacdState;

/// Classify newest-first MACD and signal series.
///
/// Golden cross means the MACD line broke above the signal line between the
/// previous day and today; death cross is the inverse break. A touch on the
/// previous day (equal values) still counts as a break. Only the golden
/// cross sets the crossover flag; everything else falls through to the
/// non-crossing bullish/bearish/neutral states.
pub fn classify(macd: &[f64], signal: &[f64]) -> (MacdState, bool) {
    if macd.len() < 2 || signal.len() < 2 {
        return (MacdState::Neutral, false);
    }
    let (macd_now, macd_prev) = (macd[0], macd[1]);
    let (sig_now, sig_prev) = (signal[0], signal[1]);

    if macd_prev <= sig_prev && macd_now > sig_now {
        return (MacdState::GoldenCross, true);
    }
    if macd_prev >= sig_prev && macd_now < sig_now {
        return (MacdState::DeathCross, false);
    }
    if macd_now > sig_now {
        (MacdState::Bullish, false)
    } else if macd_now < sig_now {
        (MacdState::Bearish, false)
    } else {
        (MacdState::Neutral, false)
    }
}

/// MACD state for a newest-first price series.
///
/// Returns `(None, false)` when fewer than 35 closes are present, i.e. the
/// MACD could not be computed at all.
pub fn macd_state(rows: &[PriceRow]) -> (Option<MacdState>, bool) {
    let closes: Vec<f64> = rows.iter().filter_map(|r| r.close()).collect();
    if closes.len() < MACD_MIN_DAYS {
        return (None, false);
    }
    let (macd, signal) = momentum::macd_series_default(&closes);
    let (state, golden) = classify(&macd, &signal);
    (Some(state), golden)
}
