//! Dashboard fan-out, error isolation, and usage accounting

use std::sync::Arc;

use async_trait::async_trait;
use equitrix::dashboard::{SignalDashboard, UsageCounter};
use equitrix::models::{PriceRow, Sentiment, Signal, SignalRule, WatchItem};
use equitrix::services::{
    DisclosureProvider, PlaceholderDisclosureProvider, PriceHistoryProvider, ProviderError,
};
use equitrix::services::dart::Disclosure;

fn price_row(bas_dt: &str, close: i64, volume: i64) -> PriceRow {
    PriceRow {
        bas_dt: bas_dt.to_string(),
        srtn_cd: "005930".to_string(),
        itms_nm: "TestCorp".to_string(),
        clpr: Some(close),
        mkp: None,
        hipr: None,
        lopr: None,
        trqu: Some(volume),
        vs: None,
        flt_rt: None,
    }
}

fn flat_history(days: usize) -> Vec<PriceRow> {
    (0..days)
        .map(|i| price_row(&format!("2025{:04}", 800 - i), 100, 1000))
        .collect()
}

fn watch(corp_code: &str, srtn_cd: &str) -> WatchItem {
    WatchItem {
        corp_code: corp_code.to_string(),
        srtn_cd: srtn_cd.to_string(),
        itms_nm: Some("TestCorp".to_string()),
    }
}

/// Returns fixed history for every ticker except one poisoned code, which
/// errors out.
struct StaticPriceProvider {
    rows: Vec<PriceRow>,
    failing_srtn_cd: Option<String>,
}

#[async_trait]
impl PriceHistoryProvider for StaticPriceProvider {
    async fn fetch(&self, srtn_cd: &str, _num_days: usize) -> Result<Vec<PriceRow>, ProviderError> {
        if self.failing_srtn_cd.as_deref() == Some(srtn_cd) {
            return Err("simulated upstream outage".into());
        }
        Ok(self.rows.clone())
    }

    fn is_configured(&self) -> bool {
        true
    }
}

struct StaticDisclosureProvider {
    filings: Vec<Disclosure>,
}

#[async_trait]
impl DisclosureProvider for StaticDisclosureProvider {
    async fn fetch_list(
        &self,
        _corp_code: &str,
        _page_count: usize,
    ) -> Result<Vec<Disclosure>, ProviderError> {
        Ok(self.filings.clone())
    }

    fn is_configured(&self) -> bool {
        true
    }
}

fn dashboard_with(
    price: Arc<dyn PriceHistoryProvider + Send + Sync>,
    usage: Arc<UsageCounter>,
) -> SignalDashboard {
    SignalDashboard::new(price, Arc::new(PlaceholderDisclosureProvider), usage)
}

#[tokio::test]
async fn unconfigured_price_provider_holds_every_item() {
    let usage = Arc::new(UsageCounter::for_today());
    let dashboard = dashboard_with(
        Arc::new(equitrix::services::PlaceholderPriceProvider),
        Arc::clone(&usage),
    );
    let items = vec![watch("00126380", "005930")];

    let result = dashboard.compute_all(&items, &SignalRule::default()).await;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].signal, Signal::Hold);
    assert!(result[0].reasons[0].contains("not configured"));
    assert_eq!(usage.total(), 0);
}

#[tokio::test]
async fn one_failing_ticker_does_not_poison_the_others() {
    let usage = Arc::new(UsageCounter::for_today());
    let dashboard = dashboard_with(
        Arc::new(StaticPriceProvider {
            rows: flat_history(40),
            failing_srtn_cd: Some("111111".to_string()),
        }),
        Arc::clone(&usage),
    );
    let items = vec![watch("00126380", "005930"), watch("00999999", "111111")];

    let result = dashboard.compute_all(&items, &SignalRule::default()).await;

    assert_eq!(result.len(), 2);
    // Input ordering is preserved even though fetches complete out of order.
    assert_eq!(result[0].corp_code, "00126380");
    assert_eq!(result[1].corp_code, "00999999");

    assert_eq!(result[0].signal, Signal::Hold);
    assert_eq!(result[0].last_close, Some(100));
    assert!(result[0].last_bas_dt.is_some());

    assert_eq!(result[1].signal, Signal::Hold);
    assert!(result[1].reasons[0].contains("fetch failed"));
    assert!(result[1].last_close.is_none());

    // Both tickers count as upstream calls, failed or not.
    assert_eq!(usage.total(), 2);
}

#[tokio::test]
async fn configured_provider_with_no_rows_explains_the_empty_result() {
    let dashboard = dashboard_with(
        Arc::new(StaticPriceProvider {
            rows: Vec::new(),
            failing_srtn_cd: None,
        }),
        Arc::new(UsageCounter::for_today()),
    );
    let items = vec![watch("00126380", "005930")];

    let result = dashboard.compute_all(&items, &SignalRule::default()).await;

    assert_eq!(result[0].signal, Signal::Hold);
    assert!(result[0].reasons[0].contains("no price data returned"));
}

#[tokio::test]
async fn latest_filing_sentiment_is_attached() {
    let filing = Disclosure {
        corp_code: "00126380".to_string(),
        corp_name: "TestCorp".to_string(),
        report_nm: "단일판매ㆍ공급계약 체결".to_string(),
        rcept_no: "20250806000001".to_string(),
        rcept_dt: "20250806".to_string(),
        flr_nm: "TestCorp".to_string(),
    };
    let dashboard = SignalDashboard::new(
        Arc::new(StaticPriceProvider {
            rows: flat_history(40),
            failing_srtn_cd: None,
        }),
        Arc::new(StaticDisclosureProvider {
            filings: vec![filing],
        }),
        Arc::new(UsageCounter::for_today()),
    );
    let items = vec![watch("00126380", "005930")];

    let result = dashboard.compute_all(&items, &SignalRule::default()).await;

    // "계약" is a positive keyword.
    assert_eq!(result[0].disclosure_sentiment, Some(Sentiment::Positive));
    assert!(result[0]
        .disclosure_summary
        .as_deref()
        .unwrap()
        .starts_with("Filing: "));
}

#[tokio::test]
async fn usage_accumulates_across_refreshes() {
    let usage = Arc::new(UsageCounter::for_today());
    let dashboard = dashboard_with(
        Arc::new(StaticPriceProvider {
            rows: flat_history(40),
            failing_srtn_cd: None,
        }),
        Arc::clone(&usage),
    );
    let items = vec![watch("00126380", "005930")];

    dashboard.compute_all(&items, &SignalRule::default()).await;
    dashboard.compute_all(&items, &SignalRule::default()).await;

    assert_eq!(usage.total(), 2);
}
