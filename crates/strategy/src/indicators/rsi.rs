/// RSI over close prices, using a plain rolling mean of gains and losses.
///
/// Index `i` averages the `period` close-to-close deltas ending at `i`, so
/// the first defined entry is at index `period`. This is the rolling-mean
/// variant, not Wilder's smoothed RSI.
#[derive(Debug, Clone)]
pub struct RsiIndicator {
    pub period: usize,
}

impl RsiIndicator {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self { period }
    }

    /// Compute the RSI column for a slice of closes (oldest first).
    pub fn series(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; closes.len()];
        if closes.len() <= self.period {
            return out;
        }

        let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
        let period_f = self.period as f64;

        for i in self.period..closes.len() {
            let window = &deltas[i - self.period..i];
            let avg_gain =
                window.iter().filter(|&&d| d > 0.0).sum::<f64>() / period_f;
            let avg_loss =
                window.iter().filter(|&&d| d < 0.0).map(|d| -d).sum::<f64>() / period_f;
            out[i] = Some(rsi_value(avg_gain, avg_loss));
        }
        out
    }
}

/// A window with no losing deltas reads 100; a window with no movement at
/// all reads 50. Both keep the relative-strength division defined.
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
