//! Core data types for the ranking scraper

use serde::{Deserialize, Serialize};

/// One row of the university ranking table
///
/// All four fields are kept as free text: the site emits non-numeric ranks
/// for tied bands and localized score formats, so nothing here is parsed
/// into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Rank as printed in the first column
    pub rank: String,

    /// University name
    pub name: String,

    /// Province the university is located in
    pub province: String,

    /// Total score as printed
    pub score: String,
}
