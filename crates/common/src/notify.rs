use async_trait::async_trait;

use crate::{Result, Signal};

/// Abstraction over the alert delivery channel.
///
/// `TelegramNotifier` in `crates/telegram` implements this for the real bot.
/// A delivery failure is reported as an `Err` for the caller to log and
/// swallow; a missed alert must never stop the scan loop.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one directional signal alert for a pair.
    async fn send_signal(&self, pair: &str, signal: Signal) -> Result<()>;
}
