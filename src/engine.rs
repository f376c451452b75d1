//! Fetch orchestrator.
//!
//! Fetches the landing page once, discovers the game links, then runs one
//! task per link with concurrent execution bounded by a counting
//! semaphore. Completed games are appended to a shared collection under a
//! lock held only for the append. Per-page failures are logged and
//! skipped; only the landing-page fetch is fatal.

use std::mem;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use tokio::sync::{Mutex, Semaphore};
use tracing::{info, warn};

use crate::fetch::PageSource;
use crate::scrape::game::game_name_from_url;
use crate::scrape::{build_game, discover_links, extract_tables};
use crate::types::Game;

/// Drives the discover → fetch → parse → aggregate pipeline.
pub struct Orchestrator<S> {
    source: Arc<S>,
    landing_url: String,
    concurrency: usize,
}

impl<S: PageSource + 'static> Orchestrator<S> {
    pub fn new(source: S, landing_url: impl Into<String>, concurrency: usize) -> Self {
        Self {
            source: Arc::new(source),
            landing_url: landing_url.into(),
            concurrency,
        }
    }

    /// Run the full scrape. Returns every game that could be fetched, in
    /// no particular order.
    pub async fn run(&self) -> Result<Vec<Game>> {
        let landing = self
            .source
            .fetch_landing(&self.landing_url)
            .await
            .context("initial landing page fetch failed")?;

        let links = discover_links(&landing);
        info!(count = links.len(), url = %self.landing_url, "Discovered game links");

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let games: Arc<Mutex<Vec<Game>>> = Arc::new(Mutex::new(Vec::with_capacity(links.len())));

        // Every task is spawned eagerly; the semaphore bounds how many
        // fetches are actually in flight at once.
        let mut handles = Vec::with_capacity(links.len());
        for link in links {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);
            let games = Arc::clone(&games);

            handles.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquisition only fails
                // if the runtime is tearing down.
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };

                let page = match source.fetch_game_page(&link).await {
                    Ok(page) => page,
                    Err(e) => {
                        warn!(error = %e, "Skipping game page");
                        return;
                    }
                };

                let tables = extract_tables(&page);
                let name = game_name_from_url(&link);
                let game = build_game(&tables, name, link);

                games.lock().await.push(game);
            }));
        }

        for handle in join_all(handles).await {
            if let Err(e) = handle {
                warn!(error = %e, "Fetch task did not complete");
            }
        }

        let games = mem::take(&mut *games.lock().await);
        info!(count = games.len(), "Games built");
        Ok(games)
    }
}
