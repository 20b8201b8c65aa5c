use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use assetbook_core::{
    FixedAssetInput, FixedAssetService, FixedAssetServiceTrait, InMemoryFixedAssetRepository,
};
use chrono::NaiveDate;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable. `log` records from the core crate are
/// forwarded through the subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    if let Err(err) = result {
        eprintln!("Tracing already initialised: {err}");
    }
}

/// Reads a JSON array of asset inputs.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<FixedAssetInput>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let inputs: Vec<FixedAssetInput> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    tracing::debug!("Loaded {} assets from {}", inputs.len(), path.display());
    Ok(inputs)
}

/// Builds a service over a fresh register and creates every seed asset
/// through it, calculating each once as of `as_of`.
pub fn build_service(
    inputs: Vec<FixedAssetInput>,
    as_of: NaiveDate,
) -> anyhow::Result<FixedAssetService> {
    let repository = Arc::new(InMemoryFixedAssetRepository::new());
    let service = FixedAssetService::new(repository);

    for input in inputs {
        let id = input.id.clone();
        service
            .create_asset(input, as_of)
            .with_context(|| format!("Failed to register asset '{}'", id))?;
    }
    tracing::info!(
        "Register ready with {} assets as of {}",
        service.existing_ids().len(),
        as_of
    );
    Ok(service)
}
