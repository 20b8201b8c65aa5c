use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::depreciation_calculator::{apply_depreciation, DepreciationCharge};
use super::fixed_assets_model::FixedAsset;
use super::fixed_assets_traits::FixedAssetRepositoryTrait;

/// In-memory fixed asset store.
///
/// Records live in a `Vec` so `list` keeps insertion order. All access goes
/// through one lock; mutations, including depreciation write-backs, hold the
/// write lock for their whole duration.
#[derive(Debug, Default)]
pub struct InMemoryFixedAssetRepository {
    assets: RwLock<Vec<FixedAsset>>,
}

impl InMemoryFixedAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still guards complete records.
    fn read(&self) -> RwLockReadGuard<'_, Vec<FixedAsset>> {
        self.assets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<FixedAsset>> {
        self.assets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sums `amounts`, clamping at the bounds of `Decimal`.
fn saturating_total(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn cached_depreciation(asset: &FixedAsset) -> Decimal {
    asset.depreciation_value.unwrap_or(Decimal::ZERO)
}

impl FixedAssetRepositoryTrait for InMemoryFixedAssetRepository {
    fn add(&self, asset: FixedAsset) {
        debug!("Adding fixed asset {}", asset.id);
        self.write().push(asset);
    }

    fn update(&self, asset: FixedAsset) {
        let mut assets = self.write();
        match assets.iter_mut().find(|a| a.id == asset.id) {
            Some(existing) => *existing = asset,
            None => debug!("Update ignored, fixed asset {} not found", asset.id),
        }
    }

    fn delete(&self, asset_id: &str) {
        let mut assets = self.write();
        let before = assets.len();
        assets.retain(|a| a.id != asset_id);
        debug!(
            "Deleted {} record(s) for fixed asset {}",
            before - assets.len(),
            asset_id
        );
    }

    fn list(&self) -> Vec<FixedAsset> {
        self.read().clone()
    }

    fn get_by_id(&self, asset_id: &str) -> Option<FixedAsset> {
        self.read().iter().find(|a| a.id == asset_id).cloned()
    }

    fn existing_ids(&self) -> Vec<String> {
        self.read().iter().map(|a| a.id.clone()).collect()
    }

    fn calculate_depreciation(
        &self,
        asset_id: &str,
        as_of: NaiveDate,
    ) -> Option<DepreciationCharge> {
        let mut assets = self.write();
        let asset = assets.iter_mut().find(|a| a.id == asset_id)?;
        apply_depreciation(asset, as_of)
    }

    fn total_acquisition_cost(&self) -> Decimal {
        saturating_total(self.read().iter().map(|a| a.acquisition_value))
    }

    fn total_accumulated_depreciation(&self) -> Decimal {
        saturating_total(self.read().iter().map(cached_depreciation))
    }

    fn total_recorded_depreciation(&self) -> Decimal {
        saturating_total(self.read().iter().map(FixedAsset::recorded_depreciation))
    }

    fn net_book_value(&self) -> Decimal {
        // Both totals from the same read guard.
        let assets = self.read();
        let cost = saturating_total(assets.iter().map(|a| a.acquisition_value));
        let accumulated = saturating_total(assets.iter().map(cached_depreciation));
        cost.saturating_sub(accumulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_assets::DepreciationMethod;
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    fn asset(id: &str, value: Decimal, method: DepreciationMethod) -> FixedAsset {
        FixedAsset {
            id: id.to_string(),
            name: format!("Asset {}", id),
            acquisition_date: start(),
            start_use_date: start(),
            acquisition_value: value,
            useful_life: 5,
            depreciation_method: method,
            depreciation_value: None,
            depreciation_history: Vec::new(),
        }
    }

    #[test]
    fn test_add_get_update_delete_round_trip() {
        let repo = InMemoryFixedAssetRepository::new();
        let a = asset("FA001", dec!(1000), DepreciationMethod::StraightLine);

        repo.add(a.clone());
        assert_eq!(repo.get_by_id("FA001"), Some(a.clone()));

        let mut renamed = a.clone();
        renamed.name = "Forklift".to_string();
        repo.update(renamed.clone());
        assert_eq!(repo.get_by_id("FA001"), Some(renamed));

        repo.delete("FA001");
        assert_eq!(repo.get_by_id("FA001"), None);
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let repo = InMemoryFixedAssetRepository::new();
        repo.add(asset("FA001", dec!(1000), DepreciationMethod::StraightLine));

        repo.update(asset("FA999", dec!(5), DepreciationMethod::StraightLine));

        assert_eq!(repo.existing_ids(), vec!["FA001".to_string()]);
        assert_eq!(repo.total_acquisition_cost(), dec!(1000));
    }

    #[test]
    fn test_add_does_not_reject_duplicates_and_delete_removes_all() {
        let repo = InMemoryFixedAssetRepository::new();
        repo.add(asset("FA001", dec!(1000), DepreciationMethod::StraightLine));
        repo.add(asset("FA001", dec!(2000), DepreciationMethod::StraightLine));
        repo.add(asset("FA002", dec!(3000), DepreciationMethod::StraightLine));
        assert_eq!(repo.list().len(), 3);

        repo.delete("FA001");
        assert_eq!(repo.existing_ids(), vec!["FA002".to_string()]);

        repo.delete("missing");
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let repo = InMemoryFixedAssetRepository::new();
        for id in ["FA003", "FA001", "FA002"] {
            repo.add(asset(id, dec!(1), DepreciationMethod::StraightLine));
        }
        assert_eq!(repo.existing_ids(), vec!["FA003", "FA001", "FA002"]);
    }

    #[test]
    fn test_calculate_depreciation_unknown_asset() {
        let repo = InMemoryFixedAssetRepository::new();
        repo.add(asset("FA001", dec!(1000), DepreciationMethod::StraightLine));

        assert_eq!(repo.calculate_depreciation("nope", start()), None);
        assert_eq!(repo.get_by_id("FA001").unwrap().depreciation_value, None);
    }

    #[test]
    fn test_calculate_depreciation_writes_back() {
        let repo = InMemoryFixedAssetRepository::new();
        repo.add(asset("FA001", dec!(1000), DepreciationMethod::DecliningBalance));

        let charge = repo.calculate_depreciation("FA001", start() + Duration::days(365));

        assert_eq!(charge, Some(DepreciationCharge::Period(dec!(400))));
        let stored = repo.get_by_id("FA001").unwrap();
        assert_eq!(stored.depreciation_value, Some(dec!(400)));
        assert_eq!(stored.depreciation_history.len(), 1);
    }

    #[test]
    fn test_aggregates() {
        let repo = InMemoryFixedAssetRepository::new();
        repo.add(asset("FA001", dec!(12000000), DepreciationMethod::StraightLine));
        repo.add(asset("FA002", dec!(10000000), DepreciationMethod::DecliningBalance));
        assert_eq!(repo.total_accumulated_depreciation(), Decimal::ZERO);
        assert_eq!(repo.net_book_value(), dec!(22000000));

        let one_year = start() + Duration::days(365);
        repo.calculate_depreciation("FA001", one_year);
        repo.calculate_depreciation("FA002", one_year);

        assert_eq!(repo.total_acquisition_cost(), dec!(22000000));
        // 12M / 5 years, plus 10M * 2/5
        assert_eq!(repo.total_accumulated_depreciation(), dec!(6400000));
        assert_eq!(repo.net_book_value(), dec!(15600000));
        assert_eq!(repo.total_recorded_depreciation(), dec!(6400000));
    }

    #[test]
    fn test_aggregates_saturate_instead_of_overflowing() {
        let repo = InMemoryFixedAssetRepository::new();
        let mut a = asset("FA001", Decimal::MAX, DepreciationMethod::StraightLine);
        a.depreciation_value = Some(Decimal::MAX);
        repo.add(a);
        repo.add(asset("FA002", Decimal::MAX, DepreciationMethod::StraightLine));

        assert_eq!(repo.total_acquisition_cost(), Decimal::MAX);
        assert_eq!(repo.total_accumulated_depreciation(), Decimal::MAX);
        assert_eq!(repo.net_book_value(), Decimal::ZERO);
    }
}
