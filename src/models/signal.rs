//! Signal outputs and diagnostic states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal decision for one ticker. Recomputed fresh per call; there is no
/// transition history inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Signal::Buy => "buy",
            Signal::Sell => "sell",
            Signal::Hold => "hold",
        })
    }
}

/// Relationship between the MACD line and its signal line on the most
/// recent two days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdState {
    GoldenCross,
    DeathCross,
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for MacdState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MacdState::GoldenCross => "golden_cross",
            MacdState::DeathCross => "death_cross",
            MacdState::Bullish => "bullish",
            MacdState::Bearish => "bearish",
            MacdState::Neutral => "neutral",
        })
    }
}

/// Filing-title sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Engine output for one ticker: the decision, its ordered reasons, and a
/// diagnostic echo of the indicator snapshot. Diagnostics are `None` when
/// history was too short to compute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_state: Option<MacdState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema25_slope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ratio: Option<f64>,
}

/// Dashboard row for one watched ticker: ticker identity attached by the
/// caller, signal and diagnostics supplied by the engine, plus the latest
/// filing sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalItem {
    pub corp_code: String,
    pub srtn_cd: String,
    pub itms_nm: Option<String>,
    pub signal: Signal,
    pub reasons: Vec<String>,
    pub last_close: Option<i64>,
    pub last_bas_dt: Option<String>,
    pub disclosure_sentiment: Option<Sentiment>,
    pub disclosure_summary: Option<String>,
}
