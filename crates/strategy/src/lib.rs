pub mod candle;
pub mod indicators;
pub mod rule;
pub mod scanner;

pub use candle::classify_candle;
pub use indicators::{IndicatorFrame, RsiIndicator, SmaIndicator};
pub use rule::evaluate_rule;
pub use scanner::Scanner;

use common::{Bar, Signal};

/// Moving-average window, in bars.
pub const MA_PERIOD: usize = 14;
/// RSI window, in close-to-close deltas.
pub const RSI_PERIOD: usize = 14;
/// RSI level at or above which an UP signal is suppressed.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI level at or below which a DOWN signal is suppressed.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Run the full detection pipeline over one pair's bar series.
///
/// A series shorter than `MA_PERIOD` is not analyzable and yields `None`
/// without computing anything. Otherwise: indicator columns over the closes,
/// candle label for the second-to-last bar (the most recent fully closed
/// candle — the last one may still be forming), then the directional rule on
/// the latest bar.
pub fn analyze_series(bars: &[Bar]) -> Option<Signal> {
    if bars.len() < MA_PERIOD {
        return None;
    }

    let frame = IndicatorFrame::compute(bars);
    let pattern = classify_candle(&bars[bars.len() - 2]);

    let last = bars.len() - 1;
    evaluate_rule(bars[last].close, frame.ma[last], frame.rsi[last], pattern)
}
