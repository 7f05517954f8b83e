use lot_sniper::config::{load_config, AppConfig};
use lot_sniper::notifier::{NoopNotifier, Notifier, TelegramNotifier};
use lot_sniper::pipeline::Pipeline;
use lot_sniper::scraper::EbaySource;
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Log details about any panic instead of dying silently
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {panic_info:?}");
    }));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".into());
    let config = if Path::new(&config_path).exists() {
        match load_config(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {e}");
                return;
            }
        }
    } else {
        info!("No config file at {config_path}, using built-in defaults");
        AppConfig::default()
    };

    let source = EbaySource::new(Duration::from_secs(config.fetch_timeout_secs));

    // Telegram when credentials exist, log-only otherwise; either way the
    // pipeline runs to completion.
    let notifier: Box<dyn Notifier> = match TelegramNotifier::from_env() {
        Some(n) => Box::new(n),
        None => {
            warn!("Telegram credentials missing, alerts will only be logged");
            Box::new(NoopNotifier)
        }
    };

    if let Err(e) = notifier.send("🚀 LotSniper started").await {
        warn!("Startup notification failed: {e}");
    }

    let interval = Duration::from_secs(config.check_interval_secs);
    let pipeline = Pipeline::new(config, source, notifier);

    // Runs are strictly sequential; the seen cache's read-modify-write
    // cycle is not safe for overlapping runs.
    loop {
        let summary = pipeline.run_once().await;
        info!(
            "Sleeping {}s until next run (last run sent {} alerts)",
            interval.as_secs(),
            summary.alerts_sent
        );
        sleep(interval).await;
    }
}
