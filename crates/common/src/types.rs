use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One 1-minute OHLC candle from the price feed.
///
/// Bars arrive oldest first at a nominal one-minute spacing, with
/// `low <= min(open, close)` and `high >= max(open, close)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Carried from the feed; Yahoo reports zero volume for forex pairs.
    pub volume: f64,
}

impl Bar {
    /// Absolute distance between open and close.
    #[inline]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full high-to-low extent of the bar.
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Shape of a single completed candle.
///
/// Exactly one label applies per bar; `Doji` wins when its condition and an
/// engulfing condition both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandlePattern {
    Doji,
    BullishEngulfing,
    BearishEngulfing,
    None,
}

/// Directional verdict emitted by the signal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Up,
    Down,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Up => write!(f, "UP"),
            Signal::Down => write!(f, "DOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar(open: f64, high: f64, low: f64, close: f64) -> Bar {
        Bar {
            timestamp: Utc.timestamp_opt(0, 0).unwrap(),
            open,
            high,
            low,
            close,
            volume: 0.0,
        }
    }

    #[test]
    fn body_and_range() {
        let b = bar(1.1000, 1.1060, 1.0990, 1.1050);
        assert!((b.body() - 0.0050).abs() < 1e-12);
        assert!((b.range() - 0.0070).abs() < 1e-12);
        assert!(b.is_bullish());
        assert!(!b.is_bearish());
    }

    #[test]
    fn signal_displays_uppercase() {
        assert_eq!(Signal::Up.to_string(), "UP");
        assert_eq!(Signal::Down.to_string(), "DOWN");
    }
}
