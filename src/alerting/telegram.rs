//! Telegram Bot API channel.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use super::{Alert, AlertError, Notifier};
use crate::config::{AlertingConfig, Credentials};

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: String,
}

pub struct TelegramNotifier {
    client: reqwest::Client,
    endpoint: Url,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &AlertingConfig, credentials: &Credentials) -> Result<Self, AlertError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let endpoint = send_message_url(&config.api_base, &credentials.token)?;

        Ok(Self {
            client,
            endpoint,
            chat_id: credentials.chat_id.clone(),
        })
    }
}

/// `{api_base}/bot{token}/sendMessage`, keeping any path prefix of the base.
fn send_message_url(api_base: &str, token: &str) -> Result<Url, AlertError> {
    let mut url = Url::parse(api_base)?;
    url.path_segments_mut()
        .map_err(|_| AlertError::BaseUrl(api_base.to_string()))?
        .pop_if_empty()
        .push(&format!("bot{token}"))
        .push("sendMessage");
    Ok(url)
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, alert: &Alert) -> Result<(), AlertError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: alert.message(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| AlertError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "telegram"
    }
}
