use std::path::PathBuf;

use anyhow::{anyhow, bail};
use assetbook_core::utils::time_utils::book_date_today;
use assetbook_core::{
    AssetSortKey, DepreciationCharge, DepreciationMethod, FixedAsset, FixedAssetServiceTrait,
    ScheduleFilter, SortDirection,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::Config;
use crate::main_lib::{build_service, load_seed};
use crate::render::{self, CurrencyFormatter};

/// Fixed asset register with straight-line and declining-balance depreciation.
#[derive(Parser, Debug)]
#[command(name = "assetbook", version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the assets to register (falls back to AB_SEED_FILE)
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Date depreciation is calculated as of, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    pub as_of: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered assets
    List {
        /// Case-insensitive match on name or ID
        #[arg(long)]
        search: Option<String>,
        /// Column to sort by
        #[arg(long, default_value = "id")]
        sort: AssetSortKey,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show one asset with its depreciation history
    Show { id: String },
    /// Recalculate depreciation for one asset, or all of them
    Calculate { id: Option<String> },
    /// Depreciation schedule, one row per posting
    Schedule {
        /// Case-insensitive match on name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        method: Option<DepreciationMethod>,
        /// Earliest acquisition date, inclusive
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest acquisition date, inclusive
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Register totals
    Summary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetDetail<'a> {
    #[serde(flatten)]
    asset: &'a FixedAsset,
    book_value: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculationResult<'a> {
    asset_id: &'a str,
    charge: Option<DepreciationCharge>,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs one command against a register seeded from the configured file and
/// returns what should be printed.
pub fn run(cli: Cli, config: &Config) -> anyhow::Result<String> {
    let as_of = cli
        .as_of
        .unwrap_or_else(|| book_date_today(config.timezone));
    let inputs = match cli.seed.as_ref().or(config.seed_file.as_ref()) {
        Some(path) => load_seed(path)?,
        None => {
            tracing::warn!("No seed file given, starting with an empty register");
            Vec::new()
        }
    };
    let service = build_service(inputs, as_of)?;
    let currency = CurrencyFormatter::new(&config.currency_symbol)?;

    match cli.command {
        Command::List { search, sort, desc } => {
            let assets = match search {
                Some(query) => service.search_assets(&query),
                None => service.list_assets(),
            };
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            let assets = service.sort_assets(assets, sort, direction);
            if cli.json {
                to_json(&assets)
            } else {
                Ok(render::asset_table(&assets, &currency))
            }
        }
        Command::Show { id } => {
            let asset = service
                .get_asset(&id)
                .ok_or_else(|| anyhow!("Fixed asset '{}' not found", id))?;
            if cli.json {
                to_json(&AssetDetail {
                    book_value: asset.book_value(),
                    asset: &asset,
                })
            } else {
                Ok(render::asset_detail(&asset, &currency))
            }
        }
        Command::Calculate { id } => {
            let results = match id {
                Some(id) => {
                    if service.get_asset(&id).is_none() {
                        bail!("Fixed asset '{}' not found", id);
                    }
                    let charge = service.calculate_depreciation(&id, as_of);
                    vec![(id, charge)]
                }
                None => service.recalculate_all(as_of),
            };
            if cli.json {
                let results: Vec<CalculationResult> = results
                    .iter()
                    .map(|(asset_id, charge)| CalculationResult {
                        asset_id,
                        charge: *charge,
                    })
                    .collect();
                to_json(&results)
            } else {
                Ok(render::charges(&results, &currency))
            }
        }
        Command::Schedule {
            name,
            method,
            from,
            to,
        } => {
            let filter = ScheduleFilter {
                name,
                method,
                acquired_from: from,
                acquired_to: to,
            };
            let rows = service.depreciation_schedule(&filter);
            if cli.json {
                to_json(&rows)
            } else {
                Ok(render::schedule(&rows, &currency))
            }
        }
        Command::Summary => {
            let summary = service.get_summary();
            if cli.json {
                to_json(&summary)
            } else {
                Ok(render::summary(&summary, &currency))
            }
        }
    }
}
