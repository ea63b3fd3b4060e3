use std::env;
use std::process::ExitCode;
use std::time::Duration;
use trade_ranker::config::{load_config, AppConfig, SupplierConfig};
use trade_ranker::display::{render_table, top_k};
use trade_ranker::model::SupplyError;
use trade_ranker::normalizer::normalize_all;
use trade_ranker::ranking::rank_with_report;
use trade_ranker::supplier::{FixtureSupplier, HttpSupplier, ItemSupplier};
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".to_string());

    // Load configuration from file
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing_subscriber::fmt::init();
            error!("Config load error ({}): {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging; load_config already validated the level
    let level = config.max_level().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_supplier(config: &AppConfig) -> Result<Box<dyn ItemSupplier>, SupplyError> {
    let supplier: Box<dyn ItemSupplier> = match &config.supplier {
        SupplierConfig::Fixture { path } => Box::new(FixtureSupplier::new(path)),
        SupplierConfig::Http { base_url, timeout_seconds } => Box::new(HttpSupplier::new(
            base_url.clone(),
            Duration::from_secs(*timeout_seconds),
        )?),
    };
    Ok(supplier)
}

/// Fetches, normalizes, ranks and prints the cheapest listings for the configured query.
fn run(config: &AppConfig) -> Result<(), SupplyError> {
    let supplier = build_supplier(config)?;

    let mut records = supplier.fetch(&config.query)?;
    info!("Fetched {} listings", records.len());

    normalize_all(&mut records);

    let ranking = rank_with_report(records);
    if ranking.dropped > 0 {
        debug!("Skipped {} listings priced in other currencies", ranking.dropped);
    }

    let listing = top_k(ranking.items, &config.query, config.top_k);
    print!("{}", render_table(&listing));
    Ok(())
}
