//! Per-user signal rule configuration.

use serde::{Deserialize, Serialize};

/// Thresholds driving the buy/sell/hold decision.
///
/// Values are taken as-is; validation belongs upstream. A negative
/// `ema_slope_threshold` is as legal as a positive one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalRule {
    /// Sell when the return since entry falls to this percentage or below.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_pct: Option<f64>,
    /// Sell when the return since entry reaches this percentage or above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit_pct: Option<f64>,
    /// Minimum 25-day EMA slope (percent) required for a buy.
    pub ema_slope_threshold: f64,
    /// Whether the volume gate participates in buy decisions.
    pub volume_ratio_on: bool,
    /// Volume-ratio threshold when the gate is on.
    pub volume_ratio_multiplier: f64,
}

impl Default for SignalRule {
    fn default() -> Self {
        Self {
            stop_loss_pct: None,
            take_profit_pct: None,
            ema_slope_threshold: 0.0,
            volume_ratio_on: true,
            volume_ratio_multiplier: 1.5,
        }
    }
}
