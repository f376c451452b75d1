//! scratchrank — scratch-off lottery expected-value scanner.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod engine;
pub mod fetch;
pub mod html;
pub mod report;
pub mod scrape;
pub mod types;
