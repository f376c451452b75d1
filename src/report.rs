//! CSV report writing.
//!
//! Sorts the scraped games by EV, descending, and writes the fixed
//! ten-column report. CSV quoting is hand-rolled: fields containing the
//! delimiter, a quote, or a line break are wrapped in double quotes with
//! embedded quotes doubled.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::types::Game;

/// Report column headers, in output order.
pub const HEADER: [&str; 10] = [
    "Name",
    "Price",
    "Odds",
    "Launch Date",
    "Original Winning Tickets",
    "Remaining Winning Tickets",
    "Estimated Original Tickets",
    "Estimated Remaining Tickets",
    "EV",
    "URL",
];

/// Sort games by EV, descending. Highest expected net cost first; this is
/// the literal published ordering, not a "best value first" ranking.
pub fn sort_by_ev(games: &mut [Game]) {
    games.sort_by(|a, b| b.ev().partial_cmp(&a.ev()).unwrap_or(Ordering::Equal));
}

/// One output row for a game.
fn render_row(game: &Game) -> Vec<String> {
    vec![
        game.name.clone(),
        game.price.to_string(),
        format!("1:{:.2}", game.odds),
        game.launch_date.clone(),
        game.total_original_prizes.to_string(),
        game.total_remaining_prizes.to_string(),
        game.original_tickets().to_string(),
        game.remaining_tickets().to_string(),
        format!("{:.2}", game.ev()),
        game.url.clone(),
    ]
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row, quoting fields as needed.
fn write_row<W: Write>(w: &mut W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Sort the games by descending EV and write the report to `path`.
/// Any I/O failure here is fatal to the run.
pub fn write_report(games: &mut Vec<Game>, path: &str) -> Result<()> {
    sort_by_ev(games);

    let file = File::create(path).context(format!("failed to create report file {path}"))?;
    let mut w = BufWriter::new(file);

    let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
    write_row(&mut w, &header).context("failed to write report header")?;
    for game in games.iter() {
        write_row(&mut w, &render_row(game))
            .context(format!("failed to write report row for {}", game.name))?;
    }
    w.flush().context("failed to flush report file")?;

    info!(path, games = games.len(), "Report written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
