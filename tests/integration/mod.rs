// Integration tests for price-scout
// Shared helpers for driving the aggregation pipeline without the network

pub mod runner_tests;

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;

use price_scout::models::SourceId;
use price_scout::price::PriceExtractor;
use price_scout::runner::{RunnerError, SourceRunner};
use price_scout::sources::{Registry, SourceAdapter};

/// Serves canned dataset items per platform, failing the ones listed.
pub struct StaticRunner {
    items: HashMap<SourceId, Vec<Value>>,
    failing: Vec<SourceId>,
}

impl StaticRunner {
    pub fn new() -> Self {
        StaticRunner {
            items: HashMap::new(),
            failing: Vec::new(),
        }
    }

    pub fn with_items(mut self, source: SourceId, items: Vec<Value>) -> Self {
        self.items.insert(source, items);
        self
    }

    pub fn with_failure(mut self, source: SourceId) -> Self {
        self.failing.push(source);
        self
    }
}

#[async_trait]
impl SourceRunner for StaticRunner {
    async fn run(
        &self,
        adapter: &SourceAdapter,
        _keyword: &str,
    ) -> Result<Vec<Value>, RunnerError> {
        if self.failing.contains(&adapter.id) {
            return Err(RunnerError::Transport("connection refused".to_string()));
        }
        Ok(self.items.get(&adapter.id).cloned().unwrap_or_default())
    }
}

pub fn item(name: &str, price: &str) -> Value {
    json!({
        "productName": name,
        "price": price,
        "moq": "2",
        "supplierNa": format!("{} Supplier", name),
        "productUrl": format!("https://example.com/{}", name),
    })
}

/// Two platforms answering, one silent: dollar-marked prices on Yiwugo,
/// bare CNY amounts (and one unpriced listing) on DHgate, nothing on
/// Made-in-China.
pub fn two_platform_runner() -> StaticRunner {
    StaticRunner::new()
        .with_items(
            SourceId::Yiwugo,
            vec![item("speaker-a", "$10.00"), item("speaker-b", "$25.00")],
        )
        .with_items(
            SourceId::Dhgate,
            vec![
                item("speaker-c", "80"),
                item("speaker-d", "120"),
                item("speaker-e", "no price listed"),
            ],
        )
}

pub fn default_registry() -> Registry {
    Registry::with_defaults()
}

pub fn default_extractor() -> PriceExtractor {
    PriceExtractor::new()
}
