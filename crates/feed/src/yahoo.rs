use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use common::{Bar, Error, MarketFeed, Result};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Bounded per-request timeout so a stalled fetch cannot block the scan loop
/// for longer than a fraction of the tick interval.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// REST client for the Yahoo Finance chart API.
///
/// Fetches the trailing 30 minutes of 1-minute candles for a pair. One
/// attempt per call; the scan loop tolerates failures, so no retry logic
/// lives here.
pub struct YahooClient {
    http: Client,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .use_rustls_tls()
                .timeout(REQUEST_TIMEOUT)
                // Yahoo rejects requests without a browser-ish user agent
                .user_agent("Mozilla/5.0 (compatible; pipwatch/0.1)")
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketFeed for YahooClient {
    async fn fetch_series(&self, pair: &str) -> Result<Vec<Bar>> {
        let url = format!("{BASE_URL}/v8/finance/chart/{pair}?interval=1m&range=30m");

        debug!(pair = %pair, "Fetching chart data");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Feed(format!("HTTP {status}: {body}")));
        }

        let response: ChartResponse = serde_json::from_str(&body)?;
        parse_chart(pair, response)
    }
}

// ─── Yahoo chart JSON parsing ────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn parse_chart(pair: &str, response: ChartResponse) -> Result<Vec<Bar>> {
    if let Some(err) = response.chart.error {
        return Err(Error::Feed(format!("chart error for {pair}: {err}")));
    }

    let result = response
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or_else(|| Error::Feed(format!("empty chart result for {pair}")))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| Error::Feed(format!("missing quote block for {pair}")))?;

    // Yahoo pads thin minutes with nulls; a bar is only usable when all four
    // price components are present.
    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let (open, high, low, close) = match (
            component(&quote.open, i),
            component(&quote.high, i),
            component(&quote.low, i),
            component(&quote.close, i),
        ) {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => continue,
        };

        let timestamp = Utc
            .timestamp_opt(ts, 0)
            .single()
            .ok_or_else(|| Error::Feed(format!("bad timestamp {ts} for {pair}")))?;

        bars.push(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume: component(&quote.volume, i).unwrap_or(0.0),
        });
    }

    Ok(bars)
}

fn component(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}
