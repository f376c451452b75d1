//! Table extraction from game status pages.
//!
//! A flat scan over the tokenizer events: cells collect non-empty trimmed
//! text nodes, rows are emitted at `</tr>`, tables at `</table>`. Nested
//! tables are not specially handled; the scan flattens them, which the
//! lottery pages never exercise. Document order is preserved; downstream
//! code relies on table 0 being the metadata table and table 1 the prize
//! schedule.

use crate::html::{Event, Tokenizer};

/// A table as an ordered sequence of rows of cell-text strings.
pub type Table = Vec<Vec<String>>;

/// Extract every `<table>` on the page, in document order.
///
/// Each non-empty trimmed text node inside a `<td>`/`<th>` becomes one
/// cell string; whitespace-only text nodes are dropped.
pub fn extract_tables(html: &str) -> Vec<Table> {
    let mut tables: Vec<Table> = Vec::new();
    let mut current_table: Table = Vec::new();
    let mut current_row: Vec<String> = Vec::new();

    let mut in_table = false;
    let mut in_row = false;
    let mut in_cell = false;

    for event in Tokenizer::new(html) {
        match event {
            Event::Open(tag) => match tag.name.as_str() {
                "table" => {
                    in_table = true;
                    current_table = Vec::new();
                }
                "tr" if in_table => {
                    in_row = true;
                    current_row = Vec::new();
                }
                "td" | "th" if in_row => in_cell = true,
                _ => {}
            },
            Event::Close(name) => match name.as_str() {
                "td" | "th" => in_cell = false,
                "tr" => {
                    if in_row {
                        in_row = false;
                        current_table.push(std::mem::take(&mut current_row));
                    }
                }
                "table" => {
                    if in_table {
                        in_table = false;
                        tables.push(std::mem::take(&mut current_table));
                    }
                }
                _ => {}
            },
            Event::Text(text) => {
                if in_cell {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        current_row.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_table() {
        let html = r#"
            <table>
                <tr><th>Prize</th><th>Original</th><th>Remaining</th></tr>
                <tr><td>$100</td><td>50</td><td>10</td></tr>
            </table>
        "#;
        let tables = extract_tables(html);
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0],
            vec![
                vec!["Prize", "Original", "Remaining"],
                vec!["$100", "50", "10"],
            ]
        );
    }

    #[test]
    fn test_tables_in_document_order() {
        let html = r#"
            <table><tr><td>meta</td></tr></table>
            <p>filler</p>
            <table><tr><td>prizes</td></tr></table>
        "#;
        let tables = extract_tables(html);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0][0], vec!["meta"]);
        assert_eq!(tables[1][0], vec!["prizes"]);
    }

    #[test]
    fn test_whitespace_only_text_dropped() {
        let html = "<table><tr><td>  </td><td> $5 </td></tr></table>";
        let tables = extract_tables(html);
        // The whitespace-only cell contributes no string at all.
        assert_eq!(tables[0], vec![vec!["$5"]]);
    }

    #[test]
    fn test_markup_inside_cell_yields_text_per_node() {
        // Each non-empty text node is its own cell string, so a <br> split
        // produces two strings. Accepted behavior, relied on nowhere.
        let html = "<table><tr><td>top<br/>bottom</td></tr></table>";
        let tables = extract_tables(html);
        assert_eq!(tables[0], vec![vec!["top", "bottom"]]);
    }

    #[test]
    fn test_styled_cell_text_survives() {
        let html = "<table><tr><td><b>$1,000</b></td><td><span>12</span></td></tr></table>";
        let tables = extract_tables(html);
        assert_eq!(tables[0], vec![vec!["$1,000", "12"]]);
    }

    #[test]
    fn test_text_outside_cells_ignored() {
        let html = "<table>caption<tr>padding<td>x</td></tr></table>";
        let tables = extract_tables(html);
        assert_eq!(tables[0], vec![vec!["x"]]);
    }

    #[test]
    fn test_no_tables() {
        assert!(extract_tables("<div>nothing here</div>").is_empty());
    }

    #[test]
    fn test_empty_row_still_emitted() {
        let html = "<table><tr></tr><tr><td>x</td></tr></table>";
        let tables = extract_tables(html);
        assert_eq!(tables[0].len(), 2);
        assert!(tables[0][0].is_empty());
    }
}
