use serde_json::Value;

use crate::models::{PLACEHOLDER, ProductRecord};
use crate::price::PriceExtractor;
use crate::sources::SourceAdapter;

/// Map one raw scraper item into the uniform record schema.
///
/// Each target field tries the adapter's aliases in priority order; missing
/// fields degrade to empty strings (title, url) or the placeholder sentinel
/// (MOQ, supplier). This never fails and has no state, so normalizing the
/// same item twice yields identical records.
pub fn normalize(
    adapter: &SourceAdapter,
    extractor: &PriceExtractor,
    raw_item: &Value,
) -> ProductRecord {
    let raw_price = first_raw(raw_item, adapter.price_fields);
    let normalized_price_usd = price_text(&raw_price).and_then(|text| extractor.extract(&text));

    ProductRecord {
        source: adapter.display_name().to_string(),
        title: first_text(raw_item, adapter.title_fields).unwrap_or_default(),
        raw_price,
        normalized_price_usd,
        min_order_quantity: first_text(raw_item, adapter.moq_fields)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        supplier: first_text(raw_item, adapter.supplier_fields)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        url: first_text(raw_item, adapter.url_fields).unwrap_or_default(),
    }
}

/// First alias present with a usable textual value.
fn first_text(item: &Value, aliases: &[&str]) -> Option<String> {
    for alias in aliases {
        match item.get(alias) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => continue,
        }
    }
    None
}

/// First alias present with any non-null value, kept verbatim for audit.
fn first_raw(item: &Value, aliases: &[&str]) -> Value {
    for alias in aliases {
        if let Some(value) = item.get(alias) {
            if !value.is_null() {
                return value.clone();
            }
        }
    }
    Value::Null
}

/// Text projection of a raw price value for numeric extraction.
fn price_text(raw: &Value) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
