use async_trait::async_trait;

use crate::{Bar, Result};

/// Abstraction over the market data source.
///
/// `YahooClient` in `crates/feed` implements this against the Yahoo Finance
/// chart API; tests substitute an in-memory implementation. A failed fetch
/// is an explicit `Err`, never a panic — the scan loop skips the pair for
/// that tick and moves on.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Fetch the trailing window of 1-minute bars for a pair, oldest first.
    async fn fetch_series(&self, pair: &str) -> Result<Vec<Bar>>;
}
