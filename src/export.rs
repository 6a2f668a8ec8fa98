use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ProductRecord;

/// Column order of the CSV export, matching the JSON snapshot's keys.
pub const CSV_HEADER: [&str; 7] = [
    "platform", "name", "price", "minPrice", "moq", "supplier", "url",
];

/// `comparison-<keyword>.<ext>`, spaces dashed so the keyword stays
/// recognizable in the filename.
pub fn export_filename(keyword: &str, extension: &str) -> String {
    format!("comparison-{}.{}", keyword.replace(' ', "-"), extension)
}

/// Write the lossless JSON snapshot of the full merged collection.
pub fn write_json(
    output_dir: &Path,
    keyword: &str,
    records: &[ProductRecord],
) -> crate::Result<PathBuf> {
    let path = output_dir.join(export_filename(keyword, "json"));
    let payload = serde_json::to_string_pretty(records)?;
    fs::write(&path, payload)?;
    Ok(path)
}

/// Write the tabular CSV export: header row, then one row per record.
pub fn write_csv(
    output_dir: &Path,
    keyword: &str,
    records: &[ProductRecord],
) -> crate::Result<PathBuf> {
    let path = output_dir.join(export_filename(keyword, "csv"));
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        let price = record.raw_price_text();
        let min_price = record
            .normalized_price_usd
            .map(|p| p.to_string())
            .unwrap_or_default();

        writer.write_record([
            record.source.as_str(),
            record.title.as_str(),
            price.as_str(),
            min_price.as_str(),
            record.min_order_quantity.as_str(),
            record.supplier.as_str(),
            record.url.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(path)
}
