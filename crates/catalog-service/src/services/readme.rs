//! README enrichment
//!
//! Best-effort retrieval of a tool's README from the raw content host of
//! its GitHub repository. Candidate locations are tried in order and the
//! first successful non-blank body wins. Every failure is swallowed.

use std::time::Duration;

use catalog_common::ReadmeConfig;
use catalog_core::Tool;
use futures::stream::{self, StreamExt};
use tracing::{debug, instrument};

use super::error::{ServiceError, ServiceResult};

/// Branch and file name pairs, in lookup order
const README_CANDIDATES: [(&str, &str); 4] = [
    ("main", "README.md"),
    ("master", "README.md"),
    ("main", "readme.md"),
    ("master", "readme.md"),
];

/// Fetches README documents for tools hosted on GitHub
#[derive(Debug, Clone)]
pub struct ReadmeFetcher {
    http_client: Option<reqwest::Client>,
    base_url: String,
    concurrency: usize,
}

impl ReadmeFetcher {
    /// Create a fetcher from configuration
    ///
    /// Returns a disabled fetcher when enrichment is turned off.
    pub fn new(config: &ReadmeConfig) -> ServiceResult<Self> {
        if !config.enabled {
            return Ok(Self::disabled());
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("devtools-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ServiceError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client: Some(http_client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            concurrency: config.concurrency.max(1),
        })
    }

    /// A fetcher that never performs requests
    pub fn disabled() -> Self {
        Self {
            http_client: None,
            base_url: String::new(),
            concurrency: 1,
        }
    }

    /// Whether enrichment is enabled
    pub fn is_enabled(&self) -> bool {
        self.http_client.is_some()
    }

    /// Candidate README URLs for a tool, in lookup order
    pub fn candidate_urls(&self, tool: &Tool) -> Vec<String> {
        let Some((owner, repo)) = tool.github_repo() else {
            return Vec::new();
        };

        README_CANDIDATES
            .iter()
            .map(|(branch, file)| format!("{}/{owner}/{repo}/{branch}/{file}", self.base_url))
            .collect()
    }

    /// Fetch the README for a tool, if any candidate location serves one
    #[instrument(skip(self, tool), fields(tool = %tool.name))]
    pub async fn fetch(&self, tool: &Tool) -> Option<String> {
        let http_client = self.http_client.as_ref()?;

        for url in self.candidate_urls(tool) {
            match Self::try_fetch(http_client, &url).await {
                Ok(Some(body)) => {
                    debug!(%url, bytes = body.len(), "README found");
                    return Some(body);
                }
                Ok(None) => debug!(%url, "README candidate missing or empty"),
                Err(e) => debug!(%url, error = %e, "README request failed"),
            }
        }

        None
    }

    async fn try_fetch(
        http_client: &reqwest::Client,
        url: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let response = http_client.get(url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(body))
    }

    /// Fetch READMEs for many tools with bounded concurrency, keeping input order
    pub async fn fetch_all(&self, tools: Vec<Tool>) -> Vec<(Tool, Option<String>)> {
        if !self.is_enabled() {
            return tools.into_iter().map(|tool| (tool, None)).collect();
        }

        stream::iter(tools)
            .map(|tool| async move {
                let readme = self.fetch(&tool).await;
                (tool, readme)
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
