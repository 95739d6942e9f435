//! CSV output writer
//!
//! Writes the crawled entries to a byte-order-mark-prefixed UTF-8 CSV so
//! spreadsheet software opens the Chinese text correctly.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::RankingEntry;

/// Default output filename
pub const DEFAULT_OUTPUT: &str = "中国大学排名2024.csv";

/// Header row, matching the four entry fields
pub const CSV_HEADER: [&str; 4] = ["排名", "学校名称", "省份", "总分"];

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Saves entries to a CSV file at `path`
///
/// The file starts with a UTF-8 byte-order mark, followed by the header row
/// and one row per entry in the given order. An empty slice still produces
/// the header-only file. Standard CSV quoting applies, so fields containing
/// commas or quotes round-trip intact.
///
/// # Errors
/// Returns an error if the file cannot be created or a row cannot be written
pub fn save_to_csv(entries: &[RankingEntry], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        writer.write_record([&entry.rank, &entry.name, &entry.province, &entry.score])?;
    }
    writer.flush()?;

    Ok(())
}
