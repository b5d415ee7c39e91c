use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tracing::{debug, info, warn};

use common::{MarketFeed, Notifier};

use crate::analyze_series;

/// Runs one analysis pass per pair per tick and forwards fired signals to
/// the notifier.
///
/// Pairs are scanned strictly in order, one at a time. A fetch failure skips
/// that pair for the tick; a delivery failure is logged and swallowed.
/// Nothing here ever aborts the loop.
pub struct Scanner {
    feed: Arc<dyn MarketFeed>,
    notifier: Arc<dyn Notifier>,
    pairs: Vec<String>,
}

impl Scanner {
    pub fn new(
        feed: Arc<dyn MarketFeed>,
        notifier: Arc<dyn Notifier>,
        pairs: Vec<String>,
    ) -> Self {
        Self {
            feed,
            notifier,
            pairs,
        }
    }

    /// Run one full pass over the pair list.
    pub async fn run_tick(&self) {
        for pair in &self.pairs {
            let bars = match self.feed.fetch_series(pair).await {
                Ok(bars) => bars,
                Err(e) => {
                    warn!(pair = %pair, error = %e, "Fetch failed — skipping pair this tick");
                    continue;
                }
            };

            let Some(signal) = analyze_series(&bars) else {
                debug!(pair = %pair, bars = bars.len(), "No signal");
                continue;
            };

            info!(pair = %pair, signal = %signal, "Signal detected");
            if let Err(e) = self.notifier.send_signal(pair, signal).await {
                warn!(pair = %pair, error = %e, "Failed to deliver signal alert");
            }
        }
    }

    /// Run the scan loop forever on a fixed cadence. Call from `tokio::spawn`.
    pub async fn run(self, tick: Duration) {
        info!(pairs = ?self.pairs, tick_secs = tick.as_secs(), "Scanner running");
        let mut interval = time::interval(tick);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.run_tick().await;
        }
    }
}
