//! Watchlist signal dashboard: bounded fan-out fetch and per-ticker
//! signal assembly.
//!
//! One price fetch and one disclosure fetch per watched ticker, at most
//! `MAX_CONCURRENT_FETCHES` tickers in flight. A failed fetch degrades that
//! ticker to hold without touching the others; the engine itself is called
//! synchronously with whatever data arrived.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::common::time::today_kst;
use crate::disclosure::classify_sentiment;
use crate::models::price::{PriceRow, WatchItem};
use crate::models::rule::SignalRule;
use crate::models::signal::{Signal, SignalItem};
use crate::services::dart::Disclosure;
use crate::services::market_data::{DisclosureProvider, PriceHistoryProvider};
use crate::signals::engine::compute_signal;

/// Days of history per price fetch. 50 leaves headroom over the 35-close
/// MACD minimum so two consecutive comparable points always exist.
const PRICE_HISTORY_DAYS: usize = 50;
const DISCLOSURE_PAGE_COUNT: usize = 5;
const MAX_CONCURRENT_FETCHES: usize = 5;

/// Counts external price-API calls for one KST day. Increments are atomic;
/// the owner rolls the counter over at the KST day boundary.
#[derive(Debug)]
pub struct UsageCounter {
    date_kst: String,
    calls: AtomicU64,
}

impl UsageCounter {
    pub fn for_today() -> Self {
        Self {
            date_kst: today_kst(),
            calls: AtomicU64::new(0),
        }
    }

    pub fn date_kst(&self) -> &str {
        &self.date_kst
    }

    pub fn record(&self, n: u64) {
        self.calls.fetch_add(n, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for UsageCounter {
    fn default() -> Self {
        Self::for_today()
    }
}

#[derive(Default)]
struct FetchedData {
    rows: Vec<PriceRow>,
    filings: Vec<Disclosure>,
    fetch_failed: bool,
}

/// Assembles one `SignalItem` per watched ticker from externally fetched
/// data, a shared rule, and the sentiment of the latest filing.
pub struct SignalDashboard {
    price_provider: Arc<dyn PriceHistoryProvider + Send + Sync>,
    disclosure_provider: Arc<dyn DisclosureProvider + Send + Sync>,
    usage: Arc<UsageCounter>,
}

impl SignalDashboard {
    pub fn new(
        price_provider: Arc<dyn PriceHistoryProvider + Send + Sync>,
        disclosure_provider: Arc<dyn DisclosureProvider + Send + Sync>,
        usage: Arc<UsageCounter>,
    ) -> Self {
        Self {
            price_provider,
            disclosure_provider,
            usage,
        }
    }

    /// Compute signals for every watch item under `rule`, preserving the
    /// caller's ordering.
    ///
    /// The dashboard path supplies no entry price, so percentage-based sell
    /// rules stay dormant here.
    pub async fn compute_all(&self, items: &[WatchItem], rule: &SignalRule) -> Vec<SignalItem> {
        let mut fetched: HashMap<String, FetchedData> = stream::iter(items.iter().cloned())
            .map(|item| {
                let price = Arc::clone(&self.price_provider);
                let disc = Arc::clone(&self.disclosure_provider);
                async move {
                    let data = fetch_one(price.as_ref(), disc.as_ref(), &item).await;
                    (item.corp_code.clone(), data)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        // One upstream call per ticker whenever the price key is configured,
        // whether or not the call succeeded.
        if self.price_provider.is_configured() {
            self.usage.record(items.len() as u64);
            debug!(
                date_kst = %self.usage.date_kst(),
                total = self.usage.total(),
                "recorded price API usage"
            );
        }

        items
            .iter()
            .map(|w| {
                let data = fetched.remove(&w.corp_code).unwrap_or_default();
                self.assemble(w, data, rule)
            })
            .collect()
    }

    fn assemble(&self, item: &WatchItem, data: FetchedData, rule: &SignalRule) -> SignalItem {
        let mut last_close = None;
        let mut last_bas_dt = None;

        let (signal, reasons) = if !self.price_provider.is_configured() {
            (
                Signal::Hold,
                vec!["price API key not configured (STOCK_PRICE_API_KEY)".to_string()],
            )
        } else if data.fetch_failed {
            (Signal::Hold, vec!["price fetch failed".to_string()])
        } else if data.rows.is_empty() {
            (
                Signal::Hold,
                vec!["no price data returned (check ticker code and date range)".to_string()],
            )
        } else {
            last_close = data.rows[0].clpr;
            last_bas_dt = Some(data.rows[0].bas_dt.clone());
            let sr = compute_signal(&data.rows, rule, None);
            debug!(srtn_cd = %item.srtn_cd, signal = %sr.signal, "computed signal");
            (sr.signal, sr.reasons)
        };

        let (disclosure_sentiment, disclosure_summary) = match data.filings.first() {
            Some(d) => {
                let (sentiment, summary) = classify_sentiment(&d.report_nm);
                (Some(sentiment), Some(summary))
            }
            None => (None, None),
        };

        SignalItem {
            corp_code: item.corp_code.clone(),
            srtn_cd: item.srtn_cd.clone(),
            itms_nm: item.itms_nm.clone(),
            signal,
            reasons,
            last_close,
            last_bas_dt,
            disclosure_sentiment,
            disclosure_summary,
        }
    }
}

/// Fetch both external feeds for one ticker, isolating failures. Only a
/// price failure is flagged; a missing disclosure list just means no
/// sentiment on the item.
async fn fetch_one(
    price: &(dyn PriceHistoryProvider + Send + Sync),
    disc: &(dyn DisclosureProvider + Send + Sync),
    item: &WatchItem,
) -> FetchedData {
    let mut fetch_failed = false;

    let rows = if price.is_configured() {
        match price.fetch(&item.srtn_cd, PRICE_HISTORY_DAYS).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(srtn_cd = %item.srtn_cd, error = %e, "price fetch failed");
                fetch_failed = true;
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let filings = if disc.is_configured() {
        match disc.fetch_list(&item.corp_code, DISCLOSURE_PAGE_COUNT).await {
            Ok(list) => list,
            Err(e) => {
                warn!(corp_code = %item.corp_code, error = %e, "disclosure fetch failed");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    FetchedData {
        rows,
        filings,
        fetch_failed,
    }
}
