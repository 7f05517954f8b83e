use crate::model::NotifyError;
use crate::notifier::Notifier;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    client: Client,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");
        Self { bot_token, chat_id, client }
    }

    /// Builds a notifier from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
    /// None when either is unset, so the caller can degrade to a no-op.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok()?;
        Some(Self::new(token, chat_id))
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let params = [
            ("chat_id", self.chat_id.clone()),
            ("text", text.to_string()),
        ];

        let response = match timeout(
            SEND_TIMEOUT,
            self.client.post(&url).form(&params).send(),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                warn!("Telegram send() failed: {e}");
                return Err(NotifyError::Api(format!("send failed: {e}")));
            }
            Err(_) => {
                warn!("Telegram send() timed out");
                return Err(NotifyError::Unreachable);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("Telegram API responded [{status}]: {body}");
            return Err(NotifyError::Api(format!("status {status}")));
        }

        info!("Telegram message sent [{status}]");
        Ok(())
    }
}
