//! Page fetching.
//!
//! The `PageSource` trait is the seam between the orchestrator and the
//! network: production code uses the `reqwest`-backed [`HttpSource`],
//! integration tests substitute a deterministic in-memory source.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::types::FetchError;

/// Abstraction over where pages come from.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the landing page. Failure here aborts the run.
    async fn fetch_landing(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch one game's status page. Failure here skips the game.
    async fn fetch_game_page(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP page source.
///
/// The client is built with reqwest's defaults on purpose: no custom
/// headers, no timeout, no retry. A hung request holds its concurrency
/// slot until the connection dies.
pub struct HttpSource {
    http: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        debug!(url, "Fetching page");
        let resp = self.http.get(url).send().await?;
        resp.text().await
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch_landing(&self, url: &str) -> Result<String, FetchError> {
        self.get_text(url).await.map_err(|e| FetchError::Landing {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn fetch_game_page(&self, url: &str) -> Result<String, FetchError> {
        self.get_text(url).await.map_err(|e| FetchError::GamePage {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
