use rust_decimal::Decimal;

use crate::models::{PLACEHOLDER, ProductRecord, SourceSummary};
use crate::sources::Registry;

/// Render the ranked comparison table to stdout.
///
/// At most `max_rows` rows are shown; the export files always carry the
/// full collection.
pub fn print_table(keyword: &str, records: &[ProductRecord], max_rows: usize) {
    println!(
        "\nPrice Comparison: \"{}\" ({} products)\n",
        keyword,
        records.len()
    );

    let header = format!(
        "{:<15}| {:<42}| {:<20}| {:<14}| {:<28}",
        "Platform", "Product", "Price", "MOQ", "Supplier"
    );
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));

    for record in records.iter().take(max_rows) {
        println!(
            "{:<15}| {:<42}| {:<20}| {:<14}| {:<28}",
            clip(&record.source, 13),
            clip(&record.title, 40),
            clip(&record.raw_price_text(), 18),
            clip(&record.min_order_quantity, 12),
            clip(&record.supplier, 26),
        );
    }

    if records.len() > max_rows {
        println!("  ... and {} more products", records.len() - max_rows);
    }
}

/// Print per-platform statistics, in registry order.
pub fn print_summary(registry: &Registry, records: &[ProductRecord]) {
    println!("\nSummary by Platform:\n");

    for adapter in registry.adapters() {
        let summary = SourceSummary::compute(adapter.display_name(), records);
        if summary.count == 0 {
            println!("  {}: no results", summary.source);
            continue;
        }
        println!(
            "  {}: {} products | Price range: {} - {} | Avg: {}",
            summary.source,
            summary.count,
            format_price(summary.min_price),
            format_price(summary.max_price),
            format_price(summary.avg_price),
        );
    }
}

fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(price) => format!("${:.2}", price),
        None => PLACEHOLDER.to_string(),
    }
}

/// Truncate to `max` characters with a trailing ellipsis marker.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() > max + 1 {
        let clipped: String = text.chars().take(max).collect();
        format!("{}…", clipped)
    } else {
        text.to_string()
    }
}
