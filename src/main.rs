//! scratchrank — scratch-off lottery expected-value scanner.
//!
//! Entry point. Initialises structured logging, loads the optional
//! configuration, scrapes every active game's status page under a
//! bounded-concurrency fetch pipeline, and writes the EV-sorted CSV
//! report. Fatal errors (landing-page fetch, report write) exit non-zero.

use anyhow::Result;
use tracing::info;

use scratchrank::config::AppConfig;
use scratchrank::engine::Orchestrator;
use scratchrank::fetch::HttpSource;
use scratchrank::report;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cfg = AppConfig::load("config.toml")?;
    info!(
        landing_url = %cfg.landing_url,
        concurrency = cfg.concurrency,
        output = %cfg.output_path,
        "scratchrank starting"
    );

    let orchestrator = Orchestrator::new(
        HttpSource::new(),
        cfg.landing_url.clone(),
        cfg.concurrency,
    );
    let mut games = orchestrator.run().await?;

    report::write_report(&mut games, &cfg.output_path)?;

    println!("Data written to {}", cfg.output_path);
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scratchrank=info"));

    fmt().with_env_filter(env_filter).with_target(true).init();
}
