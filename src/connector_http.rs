//! Roster fetched from a static CSV URL.
//!
//! A single anonymous GET. Connection failures and non-2xx statuses are
//! transport errors; a body that is not UTF-8 is a parse error. No retries.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::config::ColumnsConfig;
use crate::error::RosterError;
use crate::ingest::parse_roster;
use crate::models::Profile;
use crate::traits::RosterSource;

pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
    columns: ColumnsConfig,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout_secs: Option<u64>, columns: ColumnsConfig) -> Self {
        Self {
            url: url.into(),
            timeout: timeout_secs.map(Duration::from_secs),
            columns,
        }
    }

    async fn fetch_text(&self) -> Result<String, RosterError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RosterError::Transport(format!("failed to build HTTP client: {}", e)))?;

        debug!(url = %self.url, "fetching roster");
        let resp = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RosterError::Transport(format!("GET {} failed: {}", self.url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RosterError::Transport(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }

        let body = resp.bytes().await.map_err(|e| {
            RosterError::Transport(format!("failed to read body from {}: {}", self.url, e))
        })?;
        debug!(bytes = body.len(), "roster body received");

        String::from_utf8(body.to_vec())
            .map_err(|_| RosterError::Parse(format!("body from {} is not UTF-8 text", self.url)))
    }
}

#[async_trait]
impl RosterSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Vec<Profile>, RosterError> {
        let text = self.fetch_text().await?;
        parse_roster(&text, &self.columns)
    }
}
