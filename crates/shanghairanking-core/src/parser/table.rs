//! Ranking table parser
//!
//! Extracts one [`RankingEntry`] per body row of the data table.

use scraper::{Html, Selector};

use crate::types::RankingEntry;

/// Parses the ranking table out of one page of HTML
///
/// Locates `table.rk-table` and walks its body rows in document order. The
/// first four cell texts become rank, name, province, and score, trimmed of
/// surrounding whitespace; extra cells are ignored. Rows with fewer than
/// four cells are dropped without error. A page without the table yields an
/// empty vec.
pub fn parse_ranking_table(html: &str) -> Vec<RankingEntry> {
    let document = Html::parse_document(html);

    let Ok(table_selector) = Selector::parse("table.rk-table") else {
        return Vec::new();
    };
    let Ok(row_selector) = Selector::parse("tbody tr") else {
        return Vec::new();
    };
    let Ok(cell_selector) = Selector::parse("td") else {
        return Vec::new();
    };

    let Some(table) = document.select(&table_selector).next() else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() < 4 {
            continue;
        }

        entries.push(RankingEntry {
            rank: cells[0].clone(),
            name: cells[1].clone(),
            province: cells[2].clone(),
            score: cells[3].clone(),
        });
    }

    entries
}
