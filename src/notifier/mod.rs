pub mod telegram;

use crate::model::{Alert, NotifyError};
use tracing::info;

pub use telegram::TelegramNotifier;

/// Outbound delivery seam. Failures are surfaced for logging; they never
/// fail the run and are not retried.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

#[async_trait::async_trait]
impl<T: Notifier + ?Sized> Notifier for Box<T> {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        (**self).send(text).await
    }
}

#[async_trait::async_trait]
impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        (**self).send(text).await
    }
}

/// Human-readable alert block: marker, score, quantity (or "unknown"),
/// title, price, link.
pub fn format_alert(alert: &Alert) -> String {
    let quantity = alert
        .quantity
        .map(|q| q.to_string())
        .unwrap_or_else(|| "unknown".into());
    format!(
        "📸 Camera job lot (score {}, qty {})\n{}\n{}\n{}",
        alert.score, quantity, alert.listing.title, alert.listing.price, alert.listing.link
    )
}

/// Stand-in used when Telegram credentials are absent. The pipeline still
/// runs end to end; would-be alerts are only logged.
pub struct NoopNotifier;

#[async_trait::async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!("Would send notification:\n{text}");
        Ok(())
    }
}
