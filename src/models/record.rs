use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single product listing normalized to the cross-platform schema.
///
/// Field names serialize to the export schema (`platform`, `name`, `price`,
/// `minPrice`, `moq`, `supplier`, `url`) shared by the JSON snapshot and the
/// CSV export. `raw_price` keeps whatever the scraper returned, verbatim;
/// `normalized_price_usd` is the derived comparison value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    #[serde(rename = "platform")]
    pub source: String,

    #[serde(rename = "name")]
    pub title: String,

    #[serde(rename = "price")]
    pub raw_price: Value,

    #[serde(rename = "minPrice")]
    pub normalized_price_usd: Option<Decimal>,

    #[serde(rename = "moq")]
    pub min_order_quantity: String,

    pub supplier: String,
    pub url: String,
}

impl ProductRecord {
    /// Raw price as display text; structured values fall back to their JSON
    /// form, a missing price to the empty string.
    pub fn raw_price_text(&self) -> String {
        match &self.raw_price {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Sort key for ranking: priced records ascending, unpriced last.
    pub fn price_sort_key(&self) -> (bool, Decimal) {
        (
            self.normalized_price_usd.is_none(),
            self.normalized_price_usd.unwrap_or(Decimal::ZERO),
        )
    }
}
