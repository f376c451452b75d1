//! Mock page source for integration testing.
//!
//! Serves a fixed landing page and a map of game pages, all in-memory
//! with no network. Individual URLs can be marked as failing, fetches can
//! be given an artificial delay, and an in-flight gauge records the peak
//! number of simultaneous game-page fetches.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use scratchrank::fetch::PageSource;
use scratchrank::types::FetchError;

/// Tracks how many game-page fetches are in flight and the peak observed.
#[derive(Default)]
pub struct Gauge {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl Gauge {
    fn enter(&self) {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    /// Peak number of simultaneous fetches seen so far.
    pub fn max(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

/// Deterministic in-memory `PageSource`.
pub struct MockSource {
    landing: Option<String>,
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    delay: Duration,
    gauge: Arc<Gauge>,
}

impl MockSource {
    pub fn new(landing: impl Into<String>) -> Self {
        Self {
            landing: Some(landing.into()),
            pages: HashMap::new(),
            failing: HashSet::new(),
            delay: Duration::ZERO,
            gauge: Arc::new(Gauge::default()),
        }
    }

    /// A source whose landing-page fetch fails.
    pub fn broken_landing() -> Self {
        Self {
            landing: None,
            pages: HashMap::new(),
            failing: HashSet::new(),
            delay: Duration::ZERO,
            gauge: Arc::new(Gauge::default()),
        }
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    pub fn with_failing(mut self, url: impl Into<String>) -> Self {
        self.failing.insert(url.into());
        self
    }

    /// Artificial latency per game-page fetch, to force overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle to the in-flight gauge; survives handing the source to the
    /// orchestrator.
    pub fn gauge(&self) -> Arc<Gauge> {
        Arc::clone(&self.gauge)
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch_landing(&self, url: &str) -> Result<String, FetchError> {
        match &self.landing {
            Some(page) => Ok(page.clone()),
            None => Err(FetchError::Landing {
                url: url.to_string(),
                reason: "connection refused".into(),
            }),
        }
    }

    async fn fetch_game_page(&self, url: &str) -> Result<String, FetchError> {
        self.gauge.enter();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let result = if self.failing.contains(url) {
            Err(FetchError::GamePage {
                url: url.to_string(),
                reason: "connection reset".into(),
            })
        } else {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::GamePage {
                    url: url.to_string(),
                    reason: "404 not found".into(),
                })
        };
        self.gauge.exit();
        result
    }
}

/// Render a landing page with one game box per link.
pub fn landing_page(links: &[&str]) -> String {
    let boxes: String = links
        .iter()
        .map(|l| format!(r#"<div class="col-lg-3 gamebox"><a href="{l}">game</a></div>"#))
        .collect();
    format!(
        r#"<html><body><nav><a href="/home">home</a></nav><div class="row">{boxes}</div><footer><a href="/contact">contact</a></footer></body></html>"#
    )
}

/// Render a game status page: a metadata table followed by a prize table.
pub fn game_page(price: &str, odds: &str, launch: &str, tiers: &[(&str, &str, &str)]) -> String {
    let tier_rows: String = tiers
        .iter()
        .map(|(v, o, r)| format!("<tr><td>{v}</td><td>{o}</td><td>{r}</td></tr>"))
        .collect();
    format!(
        r#"<html><body>
        <table>
            <tr><td>Ticket Price</td><td>{price}</td></tr>
            <tr><td>Overall Odds</td><td>{odds}</td></tr>
            <tr><td>Launch Date</td><td>{launch}</td></tr>
        </table>
        <table>
            <tr><th>Prize</th><th>Original</th><th>Remaining</th></tr>
            {tier_rows}
        </table>
        </body></html>"#
    )
}
