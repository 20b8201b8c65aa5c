//! Fixed assets module - domain models, depreciation, store, and service.

mod depreciation_calculator;
mod depreciation_schedule;
mod fixed_assets_model;
mod fixed_assets_repository;
mod fixed_assets_service;
mod fixed_assets_traits;

#[cfg(test)]
mod fixed_assets_model_tests;

// Re-export the public interface
pub use depreciation_calculator::{
    apply_depreciation, declining_balance_charge, declining_balance_rate, is_period_due,
    straight_line_charge, years_used, DepreciationCharge,
};
pub use depreciation_schedule::{
    build_schedule, schedule_for_asset, DepreciationScheduleRow, ScheduleFilter,
};
pub use fixed_assets_model::{
    AssetSortKey, DepreciationEntry, DepreciationMethod, FixedAsset, FixedAssetInput,
    FixedAssetsSummary, SortDirection,
};
pub use fixed_assets_repository::InMemoryFixedAssetRepository;
pub use fixed_assets_service::FixedAssetService;
pub use fixed_assets_traits::{FixedAssetRepositoryTrait, FixedAssetServiceTrait};
