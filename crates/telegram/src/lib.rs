use async_trait::async_trait;
use chrono::{DateTime, Utc};
use teloxide::prelude::*;
use tracing::debug;

use common::{Error, Notifier, Result, Signal};

/// Telegram delivery for fired signals.
///
/// One bot, one recipient, constructed once at startup and immutable for the
/// process lifetime.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(token.into()),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_signal(&self, pair: &str, signal: Signal) -> Result<()> {
        let text = format_signal_message(pair, signal, Utc::now());
        debug!(pair = %pair, signal = %signal, "Sending Telegram alert");
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map_err(|e| Error::Telegram(e.to_string()))?;
        Ok(())
    }
}

/// Render the alert text for a fired signal. The layout is fixed; recipients
/// match on it, so it must not drift.
pub fn format_signal_message(pair: &str, signal: Signal, at: DateTime<Utc>) -> String {
    format!(
        "✅ Signal: {signal}\nPair: {pair}\nTime: {}",
        at.format("%H:%M UTC")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn message_matches_the_fixed_format() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 9, 7, 42).unwrap();
        let text = format_signal_message("EURUSD=X", Signal::Up, at);
        assert_eq!(text, "✅ Signal: UP\nPair: EURUSD=X\nTime: 09:07 UTC");
    }

    #[test]
    fn down_signal_renders_down() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 23, 59, 0).unwrap();
        let text = format_signal_message("USDJPY=X", Signal::Down, at);
        assert_eq!(text, "✅ Signal: DOWN\nPair: USDJPY=X\nTime: 23:59 UTC");
    }
}
