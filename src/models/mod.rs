//! Shared data models spanning the engine layers.

pub mod price;
pub mod rule;
pub mod signal;

pub use price::{PriceRow, WatchItem};
pub use rule::SignalRule;
pub use signal::{MacdState, Sentiment, Signal, SignalItem, SignalResult};
