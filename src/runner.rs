use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApifyConfig;
use crate::sources::SourceAdapter;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("run timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream error: HTTP {status}: {message}")]
    Upstream { status: u16, message: String },
}

/// Executes one marketplace scrape and returns its raw dataset items.
///
/// Implementations own the network round trip, the per-run timeout and the
/// item cap; the aggregator only sees items or a [`RunnerError`].
#[async_trait]
pub trait SourceRunner: Send + Sync {
    async fn run(&self, adapter: &SourceAdapter, keyword: &str)
    -> Result<Vec<Value>, RunnerError>;
}

/// Drives Apify actors through the synchronous run endpoint, which blocks
/// until the run finishes and answers with the dataset items directly.
pub struct ApifyRunner {
    client: reqwest::Client,
    base_url: String,
    token: String,
    run_timeout_secs: u64,
    max_items_per_source: u32,
}

impl ApifyRunner {
    pub fn new(config: &ApifyConfig, token: String) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.run_timeout_secs))
            .build()?;

        Ok(ApifyRunner {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            run_timeout_secs: config.run_timeout_secs,
            max_items_per_source: config.max_items_per_source,
        })
    }

    fn run_url(&self, adapter: &SourceAdapter) -> String {
        // Apify addresses actors as `owner~name` in URL paths
        let actor = adapter.actor_id.replace('/', "~");
        format!(
            "{}/v2/acts/{}/run-sync-get-dataset-items",
            self.base_url, actor
        )
    }
}

#[async_trait]
impl SourceRunner for ApifyRunner {
    async fn run(
        &self,
        adapter: &SourceAdapter,
        keyword: &str,
    ) -> Result<Vec<Value>, RunnerError> {
        let timeout = self.run_timeout_secs.to_string();
        let limit = self.max_items_per_source.to_string();

        let response = self
            .client
            .post(self.run_url(adapter))
            .query(&[
                ("token", self.token.as_str()),
                ("timeout", timeout.as_str()),
                ("limit", limit.as_str()),
                ("format", "json"),
            ])
            .json(&adapter.run_input(keyword))
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RunnerError::Upstream {
                status: status.as_u16(),
                message: clip_message(&message),
            });
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| RunnerError::Upstream {
                status: status.as_u16(),
                message: format!("invalid dataset payload: {}", e),
            })
    }
}

fn map_transport(err: reqwest::Error) -> RunnerError {
    if err.is_timeout() {
        RunnerError::Timeout
    } else {
        RunnerError::Transport(err.to_string())
    }
}

// Apify error bodies can embed whole HTML pages; keep diagnostics short.
fn clip_message(body: &str) -> String {
    body.chars().take(200).collect()
}
