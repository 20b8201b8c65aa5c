use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::sync::Arc;

use super::depreciation_calculator::DepreciationCharge;
use super::depreciation_schedule::{build_schedule, DepreciationScheduleRow, ScheduleFilter};
use super::fixed_assets_model::{
    AssetSortKey, FixedAsset, FixedAssetInput, FixedAssetsSummary, SortDirection,
};
use super::fixed_assets_traits::{FixedAssetRepositoryTrait, FixedAssetServiceTrait};
use crate::errors::Result;

/// Service for managing fixed assets
pub struct FixedAssetService {
    repository: Arc<dyn FixedAssetRepositoryTrait>,
}

impl FixedAssetService {
    /// Creates a new FixedAssetService instance
    pub fn new(repository: Arc<dyn FixedAssetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

fn compare_assets(a: &FixedAsset, b: &FixedAsset, key: AssetSortKey) -> Ordering {
    match key {
        AssetSortKey::Id => a.id.cmp(&b.id),
        AssetSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        AssetSortKey::AcquisitionDate => a.acquisition_date.cmp(&b.acquisition_date),
        AssetSortKey::StartUseDate => a.start_use_date.cmp(&b.start_use_date),
        AssetSortKey::AcquisitionValue => a.acquisition_value.cmp(&b.acquisition_value),
        AssetSortKey::UsefulLife => a.useful_life.cmp(&b.useful_life),
        AssetSortKey::DepreciationMethod => a
            .depreciation_method
            .as_str()
            .cmp(b.depreciation_method.as_str()),
        // `None` orders before any value
        AssetSortKey::DepreciationValue => a.depreciation_value.cmp(&b.depreciation_value),
    }
}

impl FixedAssetServiceTrait for FixedAssetService {
    fn create_asset(&self, input: FixedAssetInput, as_of: NaiveDate) -> Result<FixedAsset> {
        input.validate(None, &self.repository.existing_ids())?;

        let asset = input.into_asset();
        let created = asset.clone();
        debug!("Creating fixed asset {} ({})", asset.id, asset.name);
        self.repository.add(asset);

        let charge = self.repository.calculate_depreciation(&created.id, as_of);
        debug!("Initial depreciation for {}: {:?}", created.id, charge);

        Ok(self.repository.get_by_id(&created.id).unwrap_or(created))
    }

    fn update_asset(
        &self,
        original_id: &str,
        input: FixedAssetInput,
        as_of: NaiveDate,
    ) -> Result<Option<FixedAsset>> {
        let Some(current) = self.repository.get_by_id(original_id) else {
            debug!("Update ignored, fixed asset {} not found", original_id);
            return Ok(None);
        };
        input.validate(Some(original_id), &self.repository.existing_ids())?;

        let mut updated = input.into_asset();
        updated.depreciation_value = current.depreciation_value;
        updated.depreciation_history = current.depreciation_history;
        let updated_id = updated.id.clone();

        if updated_id == original_id {
            self.repository.update(updated);
        } else {
            info!("Renaming fixed asset {} to {}", original_id, updated_id);
            self.repository.delete(original_id);
            self.repository.add(updated);
        }

        self.recalculate_all(as_of);
        Ok(self.repository.get_by_id(&updated_id))
    }

    fn delete_asset(&self, asset_id: &str) {
        debug!("Deleting fixed asset {}", asset_id);
        self.repository.delete(asset_id);
    }

    fn get_asset(&self, asset_id: &str) -> Option<FixedAsset> {
        self.repository.get_by_id(asset_id)
    }

    fn list_assets(&self) -> Vec<FixedAsset> {
        self.repository.list()
    }

    fn existing_ids(&self) -> Vec<String> {
        self.repository.existing_ids()
    }

    fn calculate_depreciation(
        &self,
        asset_id: &str,
        as_of: NaiveDate,
    ) -> Option<DepreciationCharge> {
        self.repository.calculate_depreciation(asset_id, as_of)
    }

    fn recalculate_all(&self, as_of: NaiveDate) -> Vec<(String, Option<DepreciationCharge>)> {
        let ids = self.repository.existing_ids();
        debug!("Recalculating depreciation for {} assets as of {}", ids.len(), as_of);
        ids.into_iter()
            .map(|id| {
                let charge = self.repository.calculate_depreciation(&id, as_of);
                (id, charge)
            })
            .collect()
    }

    fn search_assets(&self, query: &str) -> Vec<FixedAsset> {
        let needle = query.trim().to_lowercase();
        self.repository
            .list()
            .into_iter()
            .filter(|asset| {
                asset.name.to_lowercase().contains(&needle)
                    || asset.id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn sort_assets(
        &self,
        mut assets: Vec<FixedAsset>,
        key: AssetSortKey,
        direction: SortDirection,
    ) -> Vec<FixedAsset> {
        assets.sort_by(|a, b| {
            let ordering = compare_assets(a, b, key);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        assets
    }

    fn book_value(&self, asset_id: &str) -> Option<Decimal> {
        self.repository
            .get_by_id(asset_id)
            .map(|asset| asset.book_value())
    }

    fn get_summary(&self) -> FixedAssetsSummary {
        FixedAssetsSummary {
            asset_count: self.repository.existing_ids().len(),
            total_acquisition_cost: self.repository.total_acquisition_cost(),
            total_accumulated_depreciation: self.repository.total_accumulated_depreciation(),
            net_book_value: self.repository.net_book_value(),
            total_recorded_depreciation: self.repository.total_recorded_depreciation(),
        }
    }

    fn depreciation_schedule(&self, filter: &ScheduleFilter) -> Vec<DepreciationScheduleRow> {
        build_schedule(&self.repository.list(), filter)
    }
}
