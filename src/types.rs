//! Core domain types: prize tiers, games, and the expected-value math
//! derived from them.

// ---------------------------------------------------------------------------
// Prize tiers
// ---------------------------------------------------------------------------

/// One row of a game's prize schedule. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeTier {
    /// Prize value in whole dollars.
    pub value: i64,
    /// Number of winning tickets printed at this tier.
    pub original_count: i64,
    /// Number of winning tickets still unclaimed at this tier.
    pub remaining_count: i64,
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// A scratch-off game as scraped from its status page.
///
/// Constructed in one step from the page's metadata and prize tables;
/// the totals are the sums of the tier counts. Ticket estimates and EV
/// are derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub name: String,
    /// Ticket price in whole dollars.
    pub price: i64,
    /// Overall odds ratio: "1:4.50" is stored as 4.50.
    pub odds: f64,
    /// Launch date exactly as published.
    pub launch_date: String,
    pub prize_tiers: Vec<PrizeTier>,
    /// Sum of all tiers' original counts.
    pub total_original_prizes: i64,
    /// Sum of all tiers' remaining counts.
    pub total_remaining_prizes: i64,
    /// Status page this game was scraped from.
    pub url: String,
}

impl Game {
    /// Estimated number of tickets printed, from the overall odds and the
    /// total original prize count.
    pub fn original_tickets(&self) -> i64 {
        (self.odds * self.total_original_prizes as f64).round() as i64
    }

    /// Estimated number of tickets still in circulation.
    pub fn remaining_tickets(&self) -> i64 {
        (self.odds * self.total_remaining_prizes as f64).round() as i64
    }

    /// Expected net cost of one ticket given the currently remaining
    /// prizes: price minus the probability-weighted sum of prize values.
    ///
    /// With no remaining tickets the ticket is a guaranteed loss of its
    /// face value, so EV is the price itself.
    pub fn ev(&self) -> f64 {
        let remaining_tickets = self.remaining_tickets();
        if remaining_tickets == 0 {
            return self.price as f64;
        }

        let mut expected_win = 0.0;
        for tier in &self.prize_tiers {
            if tier.remaining_count <= 0 || tier.value <= 0 {
                continue;
            }
            let prob = tier.remaining_count as f64 / remaining_tickets as f64;
            expected_win += prob * tier.value as f64;
        }

        self.price as f64 - expected_win
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fetch-layer failures, split by how the pipeline reacts to them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The landing page could not be fetched. Aborts the whole run.
    #[error("failed to fetch landing page {url}: {reason}")]
    Landing { url: String, reason: String },
    /// A single game page could not be fetched. Logged and skipped.
    #[error("failed to fetch game page {url}: {reason}")]
    GamePage { url: String, reason: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
