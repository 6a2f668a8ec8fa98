use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

use price_scout::AppError;
use price_scout::aggregator::aggregate;
use price_scout::config::AppConfig;
use price_scout::export;
use price_scout::price::PriceExtractor;
use price_scout::report;
use price_scout::runner::ApifyRunner;
use price_scout::sources::Registry;

/// Search one keyword across every supported wholesale marketplace and
/// compare prices.
#[derive(Parser)]
#[command(name = "price-scout", version, about = "Cross-platform wholesale price comparison")]
struct Cli {
    /// Search keyword; quote it when it contains spaces
    keyword: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("price_scout=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let token = match config.apify.require_token() {
        Ok(token) => token.to_string(),
        Err(_) => {
            eprintln!("Set the APIFY_TOKEN environment variable first.");
            std::process::exit(1);
        }
    };

    let registry = Registry::with_defaults();
    let extractor = PriceExtractor::with_rate(config.pricing.conversion_rate()?);
    let runner = ApifyRunner::new(&config.apify, token)?;

    println!(
        "\nSearching \"{}\" across {} platforms...\n",
        cli.keyword,
        registry.len()
    );

    match aggregate(&runner, &registry, &extractor, &cli.keyword).await {
        Ok(aggregation) => {
            report::print_table(&cli.keyword, &aggregation.records, config.display.max_rows);
            report::print_summary(&registry, &aggregation.records);

            let output_dir = Path::new(&config.export.output_dir);
            let json_path = export::write_json(output_dir, &cli.keyword, &aggregation.records)?;
            println!("\nJSON saved to {}", json_path.display());
            let csv_path = export::write_csv(output_dir, &cli.keyword, &aggregation.records)?;
            println!("CSV saved to {}\n", csv_path.display());

            info!(
                records = aggregation.records.len(),
                failed_sources = aggregation.failures.len(),
                "run complete"
            );
        }
        Err(AppError::NoResults) => {
            println!("\nNo results found across any platform.");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
