//! HTML parsers for the ranking site
//!
//! Both parsers are stateless functions over a parsed document. Every
//! class-name marker the site's markup relies on lives in these two
//! modules, so a markup change touches nothing else.

pub mod pagination;
pub mod table;

pub use pagination::discover_page_count;
pub use table::parse_ranking_table;
