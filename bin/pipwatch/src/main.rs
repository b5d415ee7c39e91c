use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use common::Config;
use feed::YahooClient;
use strategy::Scanner;
use telegram_alert::TelegramNotifier;

/// Forex pairs scanned each tick, in Yahoo Finance symbol form.
const PAIRS: [&str; 5] = ["EURUSD=X", "GBPUSD=X", "USDJPY=X", "AUDUSD=X", "USDCHF=X"];

/// Delay between full passes over the pair list.
const TICK_INTERVAL: Duration = Duration::from_secs(180);

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    info!("PipWatch starting");

    // ── Collaborators ─────────────────────────────────────────────────────────
    let feed = Arc::new(YahooClient::new());
    let notifier = Arc::new(TelegramNotifier::new(
        cfg.telegram_token.clone(),
        cfg.telegram_user_id,
    ));

    let pairs: Vec<String> = PAIRS.iter().map(|p| p.to_string()).collect();
    let scanner = Scanner::new(feed, notifier, pairs);

    // ── Scan loop ─────────────────────────────────────────────────────────────
    tokio::spawn(scanner.run(TICK_INTERVAL));

    info!("Scanner started. Waiting for shutdown signal.");
    tokio::signal::ctrl_c().await.unwrap();
    info!("Shutdown signal received. Exiting.");
}
