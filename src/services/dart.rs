//! DART filing list client (opendart.fss.or.kr, `list.json`).
//!
//! Keyed by the 8-digit corp code, distinct from the 6-digit ticker code.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::common::time::now_kst;
use crate::services::market_data::{DisclosureProvider, ProviderError};

const LIST_URL: &str = "https://opendart.fss.or.kr/api/list.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_PAGE_COUNT: usize = 100;

/// One filing entry from the DART list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disclosure {
    pub corp_code: String,
    pub corp_name: String,
    /// Report title, the input to sentiment classification.
    pub report_nm: String,
    pub rcept_no: String,
    pub rcept_dt: String,
    pub flr_nm: String,
}

/// HTTP client for the DART disclosure search API.
pub struct DartClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DartClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, LIST_URL)
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
impl DisclosureProvider for DartClient {
    /// Today's filings for a corp code, newest-first as DART returns them.
    ///
    /// A non-OK status in the payload yields an empty vector; transport
    /// failures propagate.
    async fn fetch_list(
        &self,
        corp_code: &str,
        page_count: usize,
    ) -> Result<Vec<Disclosure>, ProviderError> {
        if !self.is_configured() {
            return Ok(Vec::new());
        }
        let today = now_kst().format("%Y%m%d").to_string();

        let params = [
            ("crtfc_key", self.api_key.clone()),
            ("corp_code", corp_code.trim().to_string()),
            ("bgn_de", today.clone()),
            ("end_de", today),
            ("page_no", "1".to_string()),
            ("page_count", page_count.min(MAX_PAGE_COUNT).to_string()),
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

        if let Some(status) = data.get("status").and_then(Value::as_str) {
            if status != "000" {
                debug!(corp_code = %corp_code, status = %status, "DART returned non-OK status");
                return Ok(Vec::new());
            }
        }

        let list = data
            .get("list")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Ok(list.iter().map(parse_item).collect())
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn parse_item(raw: &Value) -> Disclosure {
    let field = |key: &str| {
        raw.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Disclosure {
        corp_code: field("corp_code"),
        corp_name: field("corp_name"),
        report_nm: field("report_nm"),
        rcept_no: field("rcept_no"),
        rcept_dt: field("rcept_dt"),
        flr_nm: field("flr_nm"),
    }
}
