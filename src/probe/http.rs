//! HTTP prober backed by a shared `reqwest` client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{Probe, ProbeError, ProbeOutcome};
use crate::config::ProbeConfig;

pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => ProbeOutcome::Up,
            Ok(response) => {
                tracing::debug!(url = %url, status = %response.status(), "Probe failed: non-200 status");
                ProbeOutcome::Status(response.status().as_u16())
            }
            Err(e) if e.is_timeout() => {
                tracing::debug!(url = %url, "Probe failed: timeout");
                ProbeOutcome::Unreachable(ProbeError::Timeout)
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Probe failed: connection error");
                ProbeOutcome::Unreachable(ProbeError::Connect)
            }
        }
    }
}
