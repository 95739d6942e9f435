//! Pagination control parser
//!
//! Reads the page-link cluster on the first ranking page to find out how
//! many pages the list spans.

use scraper::{Html, Selector};

/// Discovers the total page count from the first page's HTML
///
/// Looks for the `div.pagination` container and its `a.page-link` children,
/// parses each link's visible text as an integer, and returns the maximum.
/// Non-numeric link texts ("next", "…") are skipped. Any structural miss
/// yields 1, so a markup change degrades to a single-page crawl instead of
/// failing.
pub fn discover_page_count(html: &str) -> usize {
    max_page_link(html).unwrap_or(1)
}

fn max_page_link(html: &str) -> Option<usize> {
    let document = Html::parse_document(html);
    let container_selector = Selector::parse("div.pagination").ok()?;
    let link_selector = Selector::parse("a.page-link").ok()?;

    let container = document.select(&container_selector).next()?;
    container
        .select(&link_selector)
        .filter_map(|link| {
            link.text()
                .collect::<String>()
                .trim()
                .parse::<usize>()
                .ok()
        })
        .max()
}
