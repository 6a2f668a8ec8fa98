use tracing::{info, warn};

use crate::models::{ProductRecord, SourceId};
use crate::normalizer::normalize;
use crate::price::PriceExtractor;
use crate::runner::{RunnerError, SourceRunner};
use crate::sources::Registry;
use crate::utils::error::AppError;

/// One platform's fetch failure, kept for diagnostics alongside the merged
/// results of the platforms that did answer.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: SourceId,
    pub error: RunnerError,
}

/// The merged, price-sorted result of querying every registered platform.
#[derive(Debug)]
pub struct Aggregation {
    pub records: Vec<ProductRecord>,
    pub failures: Vec<SourceFailure>,
}

/// Query every registered platform for `keyword` and merge the results.
///
/// Platforms are fetched sequentially in registry order. A failing platform
/// is logged, recorded in `failures` and skipped; it never aborts the
/// remaining fetches. Returns [`AppError::NoResults`] when no platform
/// produced a single record, so callers can skip reporting and export.
pub async fn aggregate(
    runner: &dyn SourceRunner,
    registry: &Registry,
    extractor: &PriceExtractor,
    keyword: &str,
) -> crate::Result<Aggregation> {
    let mut records: Vec<ProductRecord> = Vec::new();
    let mut failures: Vec<SourceFailure> = Vec::new();

    for adapter in registry.adapters() {
        info!(source = adapter.display_name(), "starting scrape");
        match runner.run(adapter, keyword).await {
            Ok(items) => {
                info!(
                    source = adapter.display_name(),
                    count = items.len(),
                    "scrape finished"
                );
                records.extend(items.iter().map(|item| normalize(adapter, extractor, item)));
            }
            Err(error) => {
                warn!(source = adapter.display_name(), %error, "scrape failed");
                failures.push(SourceFailure {
                    source: adapter.id,
                    error,
                });
            }
        }
    }

    if records.is_empty() {
        return Err(AppError::NoResults);
    }

    // Cheapest first; records without a usable price sink to the end.
    // Vec::sort_by_key is stable, so ties keep their per-source fetch order.
    records.sort_by_key(ProductRecord::price_sort_key);

    Ok(Aggregation { records, failures })
}
