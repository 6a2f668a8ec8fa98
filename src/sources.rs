use serde_json::{Value, json};

use crate::models::SourceId;

/// Static call and normalization profile for one marketplace scraper.
///
/// Alias lists are probed in priority order by the normalizer; the first
/// non-empty field wins.
#[derive(Debug, Clone)]
pub struct SourceAdapter {
    pub id: SourceId,
    /// Apify actor id, `owner/name` as published.
    pub actor_id: &'static str,
    pub title_fields: &'static [&'static str],
    pub price_fields: &'static [&'static str],
    pub moq_fields: &'static [&'static str],
    pub supplier_fields: &'static [&'static str],
    pub url_fields: &'static [&'static str],
}

impl SourceAdapter {
    pub fn display_name(&self) -> &'static str {
        self.id.display_name()
    }

    /// Run input posted to the actor for one search keyword.
    pub fn run_input(&self, keyword: &str) -> Value {
        match self.id {
            SourceId::Yiwugo | SourceId::MadeInChina => json!({
                "searchKeywords": [keyword],
                "maxPages": 2,
            }),
            SourceId::Dhgate => json!({
                "searchKeywords": [keyword],
                "maxPages": 2,
                "shipTo": "us",
            }),
        }
    }
}

/// Ordered, read-only table of every marketplace the aggregator queries.
///
/// The order fixes both fetch order and the summary section order; it
/// carries no priority semantics.
#[derive(Debug, Clone)]
pub struct Registry {
    adapters: Vec<SourceAdapter>,
}

impl Registry {
    pub fn with_defaults() -> Self {
        Registry {
            adapters: vec![
                SourceAdapter {
                    id: SourceId::Yiwugo,
                    actor_id: "jungle_intertwining/yiwugo-scraper",
                    title_fields: &["productName", "title"],
                    price_fields: &["price"],
                    moq_fields: &["moq", "minOrder"],
                    supplier_fields: &["supplierNa", "seller"],
                    url_fields: &["productUrl", "url"],
                },
                SourceAdapter {
                    id: SourceId::Dhgate,
                    actor_id: "jungle_intertwining/dhgate-scraper",
                    title_fields: &["productName", "title"],
                    price_fields: &["price"],
                    moq_fields: &["moq", "minOrder"],
                    supplier_fields: &["supplierNa", "seller"],
                    url_fields: &["productUrl", "url"],
                },
                SourceAdapter {
                    id: SourceId::MadeInChina,
                    actor_id: "jungle_intertwining/made-in-china-scraper",
                    title_fields: &["productName", "title"],
                    price_fields: &["price"],
                    moq_fields: &["moq", "minOrder"],
                    supplier_fields: &["supplierNa", "seller"],
                    url_fields: &["productUrl", "url"],
                },
            ],
        }
    }

    pub fn adapters(&self) -> &[SourceAdapter] {
        &self.adapters
    }

    pub fn get(&self, id: SourceId) -> Option<&SourceAdapter> {
        self.adapters.iter().find(|adapter| adapter.id == id)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
