//! HTML scraping: link discovery on the landing page, table extraction
//! on game pages, and parsing of the extracted tables into [`Game`]s.
//!
//! [`Game`]: crate::types::Game

pub mod game;
pub mod links;
pub mod tables;

pub use game::build_game;
pub use links::discover_links;
pub use tables::extract_tables;
