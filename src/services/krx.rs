//! Daily price client for the data.go.kr `getStockPriceInfo` service.
//!
//! Upstream quota is 10,000 calls/day at 30 TPS and the data refreshes once
//! per day, so callers batch requests through the dashboard and count them.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::common::time::now_kst;
use crate::models::price::PriceRow;
use crate::services::market_data::{PriceHistoryProvider, ProviderError};

const BASE_URL: &str =
    "https://apis.data.go.kr/1160100/service/GetStockSecuritiesInfoService/getStockPriceInfo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_ROWS_PER_PAGE: usize = 100;

/// HTTP client for the public stock price feed. An empty key means
/// unconfigured; fetches then short-circuit to an empty result.
pub struct StockPriceClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl StockPriceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Override the endpoint; tests point this at a local mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into().trim().to_string(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PriceHistoryProvider for StockPriceClient {
    /// Most recent `num_days` daily rows for a 6-digit ticker, newest-first.
    ///
    /// The query window is padded by 10 calendar days to cover weekends and
    /// holidays. A non-OK envelope result code yields an empty vector, not
    /// an error; transport failures propagate.
    async fn fetch(&self, srtn_cd: &str, num_days: usize) -> Result<Vec<PriceRow>, ProviderError> {
        if !self.is_configured() {
            return Ok(Vec::new());
        }
        let end = now_kst();
        let begin = end - chrono::Duration::days(num_days as i64 + 10);

        let params = [
            ("serviceKey", self.api_key.clone()),
            ("numOfRows", num_days.min(MAX_ROWS_PER_PAGE).to_string()),
            ("pageNo", "1".to_string()),
            ("resultType", "json".to_string()),
            ("likeSrtnCd", srtn_cd.trim().to_string()),
            ("beginBasDt", begin.format("%Y%m%d").to_string()),
            ("endBasDt", end.format("%Y%m%d").to_string()),
        ];

        let data: Value = self
            .http
            .get(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let rows = parse_price_payload(&data, num_days);
        debug!(srtn_cd = %srtn_cd, count = rows.len(), "fetched daily price rows");
        Ok(rows)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Unwrap the public-data envelope and return newest-first rows.
///
/// `body.items` arrives as `{"item": [...]}`, `{"item": {...}}`, a bare
/// array, or is absent entirely; all shapes are tolerated.
fn parse_price_payload(data: &Value, num_days: usize) -> Vec<PriceRow> {
    let res = data.get("response").unwrap_or(data);
    if res.pointer("/header/resultCode").and_then(Value::as_str) != Some("00") {
        return Vec::new();
    }

    let items: Vec<Value> = match res.pointer("/body/items") {
        Some(Value::Array(arr)) => arr.clone(),
        Some(obj @ Value::Object(_)) => match obj.get("item") {
            Some(Value::Array(arr)) => arr.clone(),
            Some(single @ Value::Object(_)) => vec![single.clone()],
            Some(_) | None => vec![obj.clone()],
        },
        _ => Vec::new(),
    };

    let mut rows: Vec<PriceRow> = items.iter().map(parse_item).collect();
    rows.sort_by(|a, b| b.bas_dt.cmp(&a.bas_dt));
    rows.truncate(num_days);
    rows
}

fn parse_item(raw: &Value) -> PriceRow {
    PriceRow {
        bas_dt: str_field(raw, "basDt"),
        srtn_cd: str_field(raw, "srtnCd"),
        itms_nm: str_field(raw, "itmsNm"),
        clpr: int_field(raw, "clpr"),
        mkp: int_field(raw, "mkp"),
        hipr: int_field(raw, "hipr"),
        lopr: int_field(raw, "lopr"),
        trqu: int_field(raw, "trqu"),
        vs: int_field(raw, "vs"),
        flt_rt: float_field(raw, "fltRt"),
    }
}

fn str_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// The feed serializes numbers as strings; accept both and drop junk.
fn float_field(raw: &Value, key: &str) -> Option<f64> {
    match raw.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn int_field(raw: &Value, key: &str) -> Option<i64> {
    float_field(raw, key).map(|f| f as i64)
}
