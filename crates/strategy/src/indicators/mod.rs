pub mod rsi;
pub mod sma;

pub use rsi::RsiIndicator;
pub use sma::SmaIndicator;

use common::Bar;

use crate::{MA_PERIOD, RSI_PERIOD};

/// A bar series augmented with its derived per-bar indicator columns.
///
/// Columns have the same length as the input; an entry is `None` until
/// enough history precedes the bar for the indicator's window to be full.
#[derive(Debug, Clone)]
pub struct IndicatorFrame {
    pub ma: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
}

impl IndicatorFrame {
    /// Pure function of the input series.
    pub fn compute(bars: &[Bar]) -> Self {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        Self {
            ma: SmaIndicator::new(MA_PERIOD).series(&closes),
            rsi: RsiIndicator::new(RSI_PERIOD).series(&closes),
        }
    }
}
