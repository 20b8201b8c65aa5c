//! Depreciation schedule report.
//!
//! Flattens each asset's history into one row per posting, carrying the book
//! value left after that posting. Assets without history get a single row
//! with empty posting columns.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fixed_assets_model::{DepreciationMethod, FixedAsset};

/// Filter applied to assets before building the schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleFilter {
    /// Case-insensitive substring of the asset name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub method: Option<DepreciationMethod>,
    /// Inclusive lower bound on the acquisition date
    #[serde(default)]
    pub acquired_from: Option<NaiveDate>,
    /// Inclusive upper bound on the acquisition date
    #[serde(default)]
    pub acquired_to: Option<NaiveDate>,
}

impl ScheduleFilter {
    pub fn matches(&self, asset: &FixedAsset) -> bool {
        let name_match = self.name.as_deref().is_none_or(|needle| {
            asset
                .name
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
        });
        let method_match = self
            .method
            .is_none_or(|method| asset.depreciation_method == method);
        let from_match = self
            .acquired_from
            .is_none_or(|from| asset.acquisition_date >= from);
        let to_match = self.acquired_to.is_none_or(|to| asset.acquisition_date <= to);

        name_match && method_match && from_match && to_match
    }
}

/// One line of the depreciation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationScheduleRow {
    pub asset_id: String,
    pub asset_name: String,
    pub acquisition_date: NaiveDate,
    pub start_use_date: NaiveDate,
    pub acquisition_value: Decimal,
    pub useful_life: u32,
    pub depreciation_method: DepreciationMethod,
    /// 1-based position of the posting in the asset's history
    pub period: Option<usize>,
    pub posting_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    /// Book value after this posting
    pub book_value: Option<Decimal>,
}

impl DepreciationScheduleRow {
    fn placeholder(asset: &FixedAsset) -> Self {
        Self {
            asset_id: asset.id.clone(),
            asset_name: asset.name.clone(),
            acquisition_date: asset.acquisition_date,
            start_use_date: asset.start_use_date,
            acquisition_value: asset.acquisition_value,
            useful_life: asset.useful_life,
            depreciation_method: asset.depreciation_method,
            period: None,
            posting_date: None,
            amount: None,
            book_value: None,
        }
    }

    /// True for the row standing in for an asset with no postings.
    pub fn is_placeholder(&self) -> bool {
        self.period.is_none()
    }
}

/// Rows for a single asset.
pub fn schedule_for_asset(asset: &FixedAsset) -> Vec<DepreciationScheduleRow> {
    if asset.depreciation_history.is_empty() {
        return vec![DepreciationScheduleRow::placeholder(asset)];
    }

    asset
        .depreciation_history
        .iter()
        .zip(asset.running_book_values())
        .enumerate()
        .map(|(index, (entry, book_value))| DepreciationScheduleRow {
            period: Some(index + 1),
            posting_date: Some(entry.date),
            amount: Some(entry.amount),
            book_value: Some(book_value),
            ..DepreciationScheduleRow::placeholder(asset)
        })
        .collect()
}

/// Rows for every asset matching `filter`, in the order given.
pub fn build_schedule(assets: &[FixedAsset], filter: &ScheduleFilter) -> Vec<DepreciationScheduleRow> {
    assets
        .iter()
        .filter(|asset| filter.matches(asset))
        .flat_map(schedule_for_asset)
        .collect()
}
