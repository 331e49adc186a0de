//! Daily price observations and watchlist identity.

use serde::{Deserialize, Serialize};

/// One trading day for one ticker, as delivered by the price feed.
///
/// Sequences of rows are ordered newest-first: index 0 is the most recent
/// trading day. Rows are constructed per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Base date, `YYYYMMDD`.
    pub bas_dt: String,
    /// 6-digit ticker code.
    pub srtn_cd: String,
    /// Listed name.
    pub itms_nm: String,
    /// Closing price. Absent means a missing day.
    pub clpr: Option<i64>,
    /// Opening price.
    pub mkp: Option<i64>,
    /// Intraday high.
    pub hipr: Option<i64>,
    /// Intraday low.
    pub lopr: Option<i64>,
    /// Traded volume.
    pub trqu: Option<i64>,
    /// Change versus the previous close.
    pub vs: Option<i64>,
    /// Fluctuation rate in percent.
    pub flt_rt: Option<f64>,
}

impl PriceRow {
    pub fn close(&self) -> Option<f64> {
        self.clpr.map(|v| v as f64)
    }

    pub fn volume(&self) -> Option<f64> {
        self.trqu.map(|v| v as f64)
    }
}

/// A watched ticker. Identity comes from the caller; the engine never
/// resolves or deduplicates codes itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchItem {
    /// 8-digit DART corp code.
    pub corp_code: String,
    /// 6-digit ticker code.
    pub srtn_cd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itms_nm: Option<String>,
}
