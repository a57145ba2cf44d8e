//! Lectio - lecture session scheduler
//!
//! Thin client over a remote record store: loads the recorded sessions and
//! exports the monthly activity report as a `.docx` document.

use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectio_core::{
    generate, report_file_name, Error, RestStore, Result, SessionRepository, StoreConfig,
};

mod config;

use config::AppConfig;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Lectio");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = runtime.block_on(run(config)) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<()> {
    let store = RestStore::new(StoreConfig::new(
        config.store.url,
        config.store.api_key,
        config.store.table,
    ))?;

    let mut repository = SessionRepository::new(store);
    repository.fetch_all().await?;
    tracing::info!("Loaded {} sessions", repository.records().len());

    match generate(repository.records(), &config.report.title) {
        Ok(bytes) => {
            let name = report_file_name(&config.report.file_prefix, Local::now().date_naive());
            std::fs::write(&name, bytes)?;
            tracing::info!("Report written to {}", name);
            Ok(())
        }
        Err(Error::EmptyReport) => {
            tracing::warn!("No sessions recorded; nothing to report");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
