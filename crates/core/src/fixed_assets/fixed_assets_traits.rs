//! Fixed asset store and service traits.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::depreciation_calculator::DepreciationCharge;
use super::depreciation_schedule::{DepreciationScheduleRow, ScheduleFilter};
use super::fixed_assets_model::{
    AssetSortKey, FixedAsset, FixedAssetInput, FixedAssetsSummary, SortDirection,
};
use crate::errors::Result;

/// Trait defining the contract for the fixed asset store.
///
/// The store owns every record. It does not validate: uniqueness of IDs and
/// field ranges are checked by callers before `add`/`update`. Missing IDs are
/// never an error; lookups return `None` and mutations do nothing.
pub trait FixedAssetRepositoryTrait: Send + Sync {
    /// Appends a new record.
    fn add(&self, asset: FixedAsset);

    /// Replaces the record with the same ID wholesale. No-op if absent.
    fn update(&self, asset: FixedAsset);

    /// Removes every record with this ID. No-op if absent.
    fn delete(&self, asset_id: &str);

    /// All records, in insertion order.
    fn list(&self) -> Vec<FixedAsset>;

    fn get_by_id(&self, asset_id: &str) -> Option<FixedAsset>;

    /// IDs of all records, in insertion order.
    fn existing_ids(&self) -> Vec<String>;

    /// Runs the depreciation calculator against the stored record and writes
    /// the result back in the same step.
    ///
    /// Returns `None` when the asset does not exist.
    fn calculate_depreciation(&self, asset_id: &str, as_of: NaiveDate)
        -> Option<DepreciationCharge>;

    /// Sum of acquisition values.
    fn total_acquisition_cost(&self) -> Decimal;

    /// Sum of each asset's cached `depreciation_value` (absent counts as zero).
    fn total_accumulated_depreciation(&self) -> Decimal;

    /// Sum of every history posting of every asset.
    fn total_recorded_depreciation(&self) -> Decimal;

    fn net_book_value(&self) -> Decimal {
        self.total_acquisition_cost()
            .saturating_sub(self.total_accumulated_depreciation())
    }
}

/// Trait defining the contract for fixed asset service operations.
///
/// The service is the boundary front-ends call: it validates form input
/// before touching the store and fans recalculation out across assets.
pub trait FixedAssetServiceTrait: Send + Sync {
    /// Validates and stores a new asset, then calculates its depreciation
    /// once as of `as_of`.
    fn create_asset(&self, input: FixedAssetInput, as_of: NaiveDate) -> Result<FixedAsset>;

    /// Applies an edit to the asset currently stored as `original_id` and
    /// recalculates every asset as of `as_of`.
    ///
    /// Returns `Ok(None)` if `original_id` does not exist.
    fn update_asset(
        &self,
        original_id: &str,
        input: FixedAssetInput,
        as_of: NaiveDate,
    ) -> Result<Option<FixedAsset>>;

    /// Deletes an asset. No-op if absent.
    fn delete_asset(&self, asset_id: &str);

    fn get_asset(&self, asset_id: &str) -> Option<FixedAsset>;

    fn list_assets(&self) -> Vec<FixedAsset>;

    fn existing_ids(&self) -> Vec<String>;

    /// Calculates depreciation for one asset as of `as_of`.
    fn calculate_depreciation(&self, asset_id: &str, as_of: NaiveDate)
        -> Option<DepreciationCharge>;

    /// Calculates depreciation for every asset as of `as_of`, in list order.
    fn recalculate_all(&self, as_of: NaiveDate) -> Vec<(String, Option<DepreciationCharge>)>;

    /// Assets whose name or ID contains `query` (case-insensitive).
    fn search_assets(&self, query: &str) -> Vec<FixedAsset>;

    fn sort_assets(
        &self,
        assets: Vec<FixedAsset>,
        key: AssetSortKey,
        direction: SortDirection,
    ) -> Vec<FixedAsset>;

    /// Acquisition value minus the asset's full history.
    fn book_value(&self, asset_id: &str) -> Option<Decimal>;

    fn get_summary(&self) -> FixedAssetsSummary;

    fn depreciation_schedule(&self, filter: &ScheduleFilter) -> Vec<DepreciationScheduleRow>;
}
