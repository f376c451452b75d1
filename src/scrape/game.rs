//! Parsing extracted tables into a [`Game`].
//!
//! The metadata table is key/value rows; the prize table is a header row
//! followed by value/original/remaining rows. All numeric parsing coerces
//! malformed input to zero: a game page with a broken cell yields a
//! zeroed field, never an error.

use crate::scrape::tables::Table;
use crate::types::{Game, PrizeTier};

/// Fields pulled from the metadata table. Missing labels stay at their
/// zero values.
#[derive(Debug, Default, PartialEq)]
pub struct Metadata {
    pub price: i64,
    pub odds: f64,
    pub launch_date: String,
}

/// Scan the metadata table for the ticket price, overall odds, and launch
/// date rows. Labels match on case-insensitive substrings; rows matching
/// no label are ignored.
pub fn parse_metadata(table: &Table) -> Metadata {
    let mut meta = Metadata::default();

    for row in table {
        if row.len() < 2 {
            continue;
        }
        let key = row[0].to_lowercase();
        let val = &row[1];

        if key.contains("ticket price") {
            meta.price = parse_dollar(val);
        } else if key.contains("overall odds") {
            meta.odds = parse_odds(val);
        } else if key.contains("launch date") {
            meta.launch_date = val.clone();
        }
    }

    meta
}

/// Parse the prize table into tiers, skipping the header row, rows with
/// fewer than three cells, and second-chance promotional rows.
pub fn parse_prizes(table: &Table) -> Vec<PrizeTier> {
    let mut prizes = Vec::new();

    for row in table.iter().skip(1) {
        if row.len() < 3 {
            continue;
        }
        if row[0].to_lowercase().contains("2nd chance") {
            continue;
        }
        prizes.push(PrizeTier {
            value: parse_dollar(&row[0]),
            original_count: parse_count(&row[1]),
            remaining_count: parse_count(&row[2]),
        });
    }

    prizes
}

/// Build a [`Game`] from a page's extracted tables. Table 0 is the
/// metadata table and table 1 the prize table, by the site's layout;
/// a missing table is treated as empty and yields zeroed fields.
pub fn build_game(tables: &[Table], name: String, url: String) -> Game {
    const EMPTY: &Table = &Vec::new();
    let meta_table = tables.first().unwrap_or(EMPTY);
    let prize_table = tables.get(1).unwrap_or(EMPTY);

    let meta = parse_metadata(meta_table);
    let prize_tiers = parse_prizes(prize_table);

    let total_original_prizes = prize_tiers.iter().map(|t| t.original_count).sum();
    let total_remaining_prizes = prize_tiers.iter().map(|t| t.remaining_count).sum();

    Game {
        name,
        price: meta.price,
        odds: meta.odds,
        launch_date: meta.launch_date,
        prize_tiers,
        total_original_prizes,
        total_remaining_prizes,
        url,
    }
}

/// Derive a display name from a game URL: the last path segment with
/// hyphens replaced by spaces. Falls back to the URL itself when there is
/// no path to split.
pub fn game_name_from_url(url: &str) -> String {
    let trimmed = url.trim_matches('/');
    let parts: Vec<&str> = trimmed.split('/').collect();
    match parts.as_slice() {
        [] | [_] => url.to_string(),
        [.., last] => last.replace('-', " "),
    }
}

// ---------------------------------------------------------------------------
// Numeric cell parsing
// ---------------------------------------------------------------------------

/// "$1,000" -> 1000. Malformed input parses to 0.
fn parse_dollar(s: &str) -> i64 {
    s.replace(['$', ','], "").parse().unwrap_or(0)
}

/// "1:4.50" -> 4.50. Anything without exactly one colon, or with a
/// non-numeric right-hand side, parses to 0.0.
fn parse_odds(s: &str) -> f64 {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return 0.0;
    }
    parts[1].trim().parse().unwrap_or(0.0)
}

/// "12,345" -> 12345. Malformed input parses to 0.
fn parse_count(s: &str) -> i64 {
    s.replace(',', "").parse().unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
