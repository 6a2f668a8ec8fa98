use rust_decimal::Decimal;

use crate::models::record::ProductRecord;

/// Per-platform statistics over the merged collection.
///
/// Price statistics cover only records with a usable normalized price; a
/// platform with none keeps `None` rather than a fabricated number.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSummary {
    pub source: String,
    pub count: usize,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub avg_price: Option<Decimal>,
}

impl SourceSummary {
    /// Compute statistics for one platform's slice of the merged records.
    pub fn compute(display_name: &str, records: &[ProductRecord]) -> Self {
        let count = records.iter().filter(|r| r.source == display_name).count();
        let prices: Vec<Decimal> = records
            .iter()
            .filter(|r| r.source == display_name)
            .filter_map(|r| r.normalized_price_usd)
            .collect();

        let (min_price, max_price, avg_price) = if prices.is_empty() {
            (None, None, None)
        } else {
            let sum: Decimal = prices.iter().copied().sum();
            let avg = (sum / Decimal::from(prices.len() as u64)).round_dp(2);
            (
                prices.iter().copied().min(),
                prices.iter().copied().max(),
                Some(avg),
            )
        };

        SourceSummary {
            source: display_name.to_string(),
            count,
            min_price,
            max_price,
            avg_price,
        }
    }

    pub fn has_prices(&self) -> bool {
        self.avg_price.is_some()
    }
}
