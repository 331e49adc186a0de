//! Provider seams for price history and disclosures.
//!
//! The engine is called with already-fetched data; these traits are the
//! only place the dashboard touches the outside world, which keeps the
//! whole pipeline testable with in-memory fakes.

use async_trait::async_trait;

use crate::models::price::PriceRow;
use crate::services::dart::Disclosure;

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Daily price history for a ticker, newest-first, already trimmed and
/// sorted by the provider.
#[async_trait]
pub trait PriceHistoryProvider {
    async fn fetch(&self, srtn_cd: &str, num_days: usize) -> Result<Vec<PriceRow>, ProviderError>;

    /// Whether the provider has credentials to perform real fetches.
    fn is_configured(&self) -> bool;
}

/// Recent filings for a corp code, newest-first.
#[async_trait]
pub trait DisclosureProvider {
    async fn fetch_list(
        &self,
        corp_code: &str,
        page_count: usize,
    ) -> Result<Vec<Disclosure>, ProviderError>;

    fn is_configured(&self) -> bool;
}

/// No-op price provider for wiring and tests.
pub struct PlaceholderPriceProvider;

#[async_trait]
impl PriceHistoryProvider for PlaceholderPriceProvider {
    async fn fetch(
        &self,
        _srtn_cd: &str,
        _num_days: usize,
    ) -> Result<Vec<PriceRow>, ProviderError> {
        Ok(Vec::new())
    }

    fn is_configured(&self) -> bool {
        false
    }
}

/// No-op disclosure provider for wiring and tests.
pub struct PlaceholderDisclosureProvider;

#[async_trait]
impl DisclosureProvider for PlaceholderDisclosureProvider {
    async fn fetch_list(
        &self,
        _corp_code: &str,
        _page_count: usize,
    ) -> Result<Vec<Disclosure>, ProviderError> {
        Ok(Vec::new())
    }

    fn is_configured(&self) -> bool {
        false
    }
}
