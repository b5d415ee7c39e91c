use common::{CandlePattern, Signal};

use crate::{RSI_OVERBOUGHT, RSI_OVERSOLD};

/// Combine the latest bar's close-vs-MA relation, its RSI, and the completed
/// candle's label into a directional verdict.
///
/// Both indicator values must be defined; an unfilled window yields `None`
/// rather than a comparison against a placeholder.
pub fn evaluate_rule(
    close: f64,
    ma: Option<f64>,
    rsi: Option<f64>,
    pattern: CandlePattern,
) -> Option<Signal> {
    let (ma, rsi) = match (ma, rsi) {
        (Some(m), Some(r)) => (m, r),
        _ => return None,
    };

    if close > ma && rsi < RSI_OVERBOUGHT && pattern == CandlePattern::BullishEngulfing {
        Some(Signal::Up)
    } else if close < ma && rsi > RSI_OVERSOLD && pattern == CandlePattern::BearishEngulfing {
        Some(Signal::Down)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullish_candle_above_ma_with_calm_rsi_fires_up() {
        let signal = evaluate_rule(
            1.1050,
            Some(1.1020),
            Some(55.0),
            CandlePattern::BullishEngulfing,
        );
        assert_eq!(signal, Some(Signal::Up));
    }

    #[test]
    fn overbought_rsi_blocks_the_up_signal() {
        let signal = evaluate_rule(
            1.1050,
            Some(1.1020),
            Some(75.0),
            CandlePattern::BullishEngulfing,
        );
        assert_eq!(signal, None);
    }

    #[test]
    fn bearish_candle_below_ma_with_elevated_rsi_fires_down() {
        let signal = evaluate_rule(
            1.0990,
            Some(1.1020),
            Some(45.0),
            CandlePattern::BearishEngulfing,
        );
        assert_eq!(signal, Some(Signal::Down));
    }

    #[test]
    fn oversold_rsi_blocks_the_down_signal() {
        let signal = evaluate_rule(
            1.0990,
            Some(1.1020),
            Some(25.0),
            CandlePattern::BearishEngulfing,
        );
        assert_eq!(signal, None);
    }

    #[test]
    fn doji_never_fires() {
        assert_eq!(
            evaluate_rule(1.1050, Some(1.1020), Some(55.0), CandlePattern::Doji),
            None
        );
        assert_eq!(
            evaluate_rule(1.0990, Some(1.1020), Some(55.0), CandlePattern::Doji),
            None
        );
    }

    #[test]
    fn wrong_side_of_the_ma_blocks_either_direction() {
        assert_eq!(
            evaluate_rule(1.1000, Some(1.1020), Some(55.0), CandlePattern::BullishEngulfing),
            None
        );
        assert_eq!(
            evaluate_rule(1.1050, Some(1.1020), Some(55.0), CandlePattern::BearishEngulfing),
            None
        );
    }

    #[test]
    fn undefined_indicators_short_circuit() {
        assert_eq!(
            evaluate_rule(1.1050, None, Some(55.0), CandlePattern::BullishEngulfing),
            None
        );
        assert_eq!(
            evaluate_rule(1.1050, Some(1.1020), None, CandlePattern::BullishEngulfing),
            None
        );
    }
}
