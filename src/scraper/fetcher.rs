use crate::model::SourceError;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; LotSniper/0.1)";

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest)?;

        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status().as_u16()));
        }

        response.text().await.map_err(map_reqwest)
    }
}

fn map_reqwest(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Http(e.to_string())
    }
}
