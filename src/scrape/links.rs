//! Landing-page link discovery.
//!
//! The active-games landing page is a grid of `<div class="col-lg-3
//! gamebox">` boxes, each wrapping an anchor to one game's status page.
//! Anchors outside those boxes (navigation, footer) must not be captured,
//! so the scan tracks nesting depth with a small automaton instead of a
//! bag of flags.

use crate::html::{Event, Tokenizer};

/// Class attribute that marks a game box on the landing page. Matched
/// exactly, not as a substring.
const GAMEBOX_CLASS: &str = "col-lg-3 gamebox";

/// Where the scan currently is relative to a game box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    /// Inside a game box, `depth` nested `div`s deep (1 = the box itself).
    Inside { depth: u32 },
}

/// Collect the `href` of every anchor nested inside a game-box `div`,
/// in document order. Returns an empty list when no game box exists.
pub fn discover_links(html: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut section = Section::Outside;

    for event in Tokenizer::new(html) {
        match event {
            Event::Open(tag) if tag.name == "div" && !tag.self_closing => {
                section = match section {
                    Section::Outside if tag.attr("class") == Some(GAMEBOX_CLASS) => {
                        Section::Inside { depth: 1 }
                    }
                    Section::Outside => Section::Outside,
                    Section::Inside { depth } => Section::Inside { depth: depth + 1 },
                };
            }
            Event::Close(name) if name == "div" => {
                if let Section::Inside { depth } = section {
                    section = if depth <= 1 {
                        Section::Outside
                    } else {
                        Section::Inside { depth: depth - 1 }
                    };
                }
            }
            Event::Open(tag) if tag.name == "a" => {
                if matches!(section, Section::Inside { .. }) {
                    if let Some(href) = tag.attr("href") {
                        links.push(href.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    links
}
