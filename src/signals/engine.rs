//! Buy/sell/hold decision policy.

use crate::indicators::{trend, volume};
use crate::models::price::PriceRow;
use crate::models::rule::SignalRule;
use crate::models::signal::{MacdState, Signal, SignalResult};
use crate::signals::crossover;

/// Decide buy/sell/hold for a newest-first price series under `rule`.
///
/// `entry_price` activates the stop-loss/take-profit sell rules. The
/// dashboard path passes `None`, which leaves those rules dormant until
/// position tracking exists upstream.
///
/// The policy is strictly ordered: sell conditions are evaluated before buy
/// conditions, so a death cross or threshold breach wins over a
/// simultaneous buy setup. Short history never aborts the computation; it
/// surfaces as `None` diagnostics and a hold.
pub fn compute_signal(
    rows: &[PriceRow],
    rule: &SignalRule,
    entry_price: Option<f64>,
) -> SignalResult {
    if rows.is_empty() {
        return SignalResult {
            signal: Signal::Hold,
            reasons: vec!["no data".to_string()],
            macd_state: None,
            ema25_slope: None,
            volume_ratio: None,
        };
    }

    let (macd_state, golden_cross) = crossover::macd_state(rows);
    let ema_slope = trend::ema25_slope(rows);
    let vol_ratio = volume::volume_ratio(rows);

    let current = match rows[0].close() {
        Some(c) => c,
        None => {
            return SignalResult {
                signal: Signal::Hold,
                reasons: vec!["no closing price".to_string()],
                macd_state,
                ema25_slope: ema_slope,
                volume_ratio: vol_ratio,
            }
        }
    };

    // Sell first: death cross or a percentage breach since entry.
    let mut reasons: Vec<String> = Vec::new();
    if macd_state == Some(MacdState::DeathCross) {
        reasons.push("MACD death cross".to_string());
    }
    if let Some(entry) = entry_price.filter(|e| *e > 0.0) {
        let pct = (current - entry) / entry * 100.0;
        if let Some(stop) = rule.stop_loss_pct {
            if pct <= stop {
                reasons.push(format!("stop loss hit ({pct:.1}%)"));
            }
        }
        if let Some(take) = rule.take_profit_pct {
            if pct >= take {
                reasons.push(format!("take profit hit ({pct:.1}%)"));
            }
        }
    }
    if !reasons.is_empty() {
        return SignalResult {
            signal: Signal::Sell,
            reasons,
            macd_state,
            ema25_slope: ema_slope,
            volume_ratio: vol_ratio,
        };
    }

    // Buy: golden cross plus slope, with the optional volume gate.
    if golden_cross {
        if let Some(slope) = ema_slope.filter(|s| *s >= rule.ema_slope_threshold) {
            let vol_ok = !rule.volume_ratio_on
                || vol_ratio.is_some_and(|v| v >= rule.volume_ratio_multiplier);
            if vol_ok {
                reasons.push("MACD golden cross".to_string());
                reasons.push(format!("25-day EMA slope ok ({slope:.2}%)"));
                if rule.volume_ratio_on {
                    if let Some(v) = vol_ratio {
                        reasons.push(format!("volume surge ({v:.1}x)"));
                    }
                }
                return SignalResult {
                    signal: Signal::Buy,
                    reasons,
                    macd_state,
                    ema25_slope: ema_slope,
                    volume_ratio: vol_ratio,
                };
            }
        }
    }

    // Hold: explain whichever buy condition is unmet.
    let mut hold_reasons: Vec<String> = Vec::new();
    if !golden_cross {
        let state = macd_state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "insufficient data".to_string());
        hold_reasons.push(format!("no MACD golden cross (current: {state})"));
    }
    if let Some(slope) = ema_slope {
        if slope < rule.ema_slope_threshold {
            hold_reasons.push(format!(
                "25-day EMA slope {slope:.2}% below threshold {}%",
                rule.ema_slope_threshold
            ));
        }
    }
    if rule.volume_ratio_on {
        if let Some(v) = vol_ratio {
            if v < rule.volume_ratio_multiplier {
                hold_reasons.push(format!(
                    "volume ratio {v:.1}x below {}x",
                    rule.volume_ratio_multiplier
                ));
            }
        }
    }
    if hold_reasons.is_empty() {
        hold_reasons.push("buy conditions not met".to_string());
    }
    SignalResult {
        signal: Signal::Hold,
        reasons: hold_reasons,
        macd_state,
        ema25_slope: ema_slope,
        volume_ratio: vol_ratio,
    }
}
