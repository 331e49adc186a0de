//! External data collaborators: market data and corporate disclosures.

pub mod dart;
pub mod krx;
pub mod market_data;

pub use dart::{DartClient, Disclosure};
pub use krx::StockPriceClient;
pub use market_data::{
    DisclosureProvider, PlaceholderDisclosureProvider, PlaceholderPriceProvider,
    PriceHistoryProvider, ProviderError,
};
