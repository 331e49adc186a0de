//! 25-day EMA slope.

use crate::common::math;
use crate::models::price::PriceRow;

const EMA_PERIOD: usize = 25;

/// Day-over-day percentage change of the 25-day EMA.
///
/// `rows` are newest-first. Needs 26 present closes; returns `None` on
/// shorter history, and on a zero prior EMA rather than dividing by it.
pub fn ema25_slope(rows: &[PriceRow]) -> Option<f64> {
    let closes: Vec<f64> = rows.iter().filter_map(|r| r.close()).collect();
    if closes.len() < EMA_PERIOD + 1 {
        return None;
    }
    let chrono: Vec<f64> = closes.iter().rev().copied().collect();
    let ema_now = math::ema(&chrono, EMA_PERIOD)?;
    let ema_prev = math::ema(&chrono[..chrono.len() - 1], EMA_PERIOD)?;
    if ema_prev == 0.0 {
        return None;
    }
    Some((ema_now - ema_prev) / ema_prev * 100.0)
}
