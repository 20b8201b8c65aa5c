//! Fixed asset domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    MAX_ACQUISITION_VALUE, MAX_ASSET_ID_LENGTH, MAX_ASSET_NAME_LENGTH, MIN_USEFUL_LIFE_YEARS,
};
use crate::errors::{Error, Result, ValidationError};

/// Depreciation method of a fixed asset.
///
/// The set is closed: values outside it are rejected when parsed, so the
/// calculator can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepreciationMethod {
    /// Value spread evenly over the useful life
    #[default]
    StraightLine,
    /// Double-declining balance on the remaining book value
    DecliningBalance,
}

impl DepreciationMethod {
    /// Returns the serialized representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "STRAIGHT_LINE",
            DepreciationMethod::DecliningBalance => "DECLINING_BALANCE",
        }
    }

    /// Human readable label, as shown in asset lists and reports.
    pub const fn label(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "Straight Line",
            DepreciationMethod::DecliningBalance => "Declining Balance",
        }
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DepreciationMethod {
    type Err = ValidationError;

    /// Accepts the serialized form as well as kebab/lowercase spellings
    /// (`straight-line`, `declining_balance`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "STRAIGHT_LINE" => Ok(DepreciationMethod::StraightLine),
            "DECLINING_BALANCE" => Ok(DepreciationMethod::DecliningBalance),
            _ => Err(ValidationError::UnknownDepreciationMethod(s.to_string())),
        }
    }
}

/// One posting in an asset's depreciation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationEntry {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Domain model representing a fixed asset in the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    pub id: String,
    pub name: String,
    pub acquisition_date: NaiveDate,
    pub start_use_date: NaiveDate,
    pub acquisition_value: Decimal,
    /// Useful life in years
    pub useful_life: u32,
    pub depreciation_method: DepreciationMethod,
    /// Charge produced by the most recent calculation. For straight-line this
    /// is the depreciation accumulated to date; for declining balance it is
    /// the latest period's charge only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depreciation_value: Option<Decimal>,
    /// Postings in the order they were calculated. Append-only.
    #[serde(default)]
    pub depreciation_history: Vec<DepreciationEntry>,
}

impl FixedAsset {
    /// Sum of every amount posted to the history.
    pub fn recorded_depreciation(&self) -> Decimal {
        self.depreciation_history
            .iter()
            .fold(Decimal::ZERO, |total, e| total.saturating_add(e.amount))
    }

    /// Acquisition value minus everything posted to the history.
    ///
    /// Not clamped: a history that over-depreciates yields a negative value.
    pub fn book_value(&self) -> Decimal {
        self.acquisition_value
            .saturating_sub(self.recorded_depreciation())
    }

    /// Book value after each history entry, in history order.
    pub fn running_book_values(&self) -> Vec<Decimal> {
        self.depreciation_history
            .iter()
            .scan(self.acquisition_value, |book_value, entry| {
                *book_value = book_value.saturating_sub(entry.amount);
                Some(*book_value)
            })
            .collect()
    }
}

/// Input model for the create/edit asset form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedAssetInput {
    pub id: String,
    pub name: String,
    pub acquisition_date: NaiveDate,
    pub start_use_date: NaiveDate,
    pub acquisition_value: Decimal,
    pub useful_life: u32,
    #[serde(default)]
    pub depreciation_method: DepreciationMethod,
}

impl FixedAssetInput {
    /// Validates the form data.
    ///
    /// `original_id` is the ID of the asset being edited, `None` when creating.
    /// The duplicate check against `existing_ids` only runs for new assets or
    /// when the ID changes.
    pub fn validate(&self, original_id: Option<&str>, existing_ids: &[String]) -> Result<()> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if id.chars().count() > MAX_ASSET_ID_LENGTH {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Asset ID must be at most {} characters",
                MAX_ASSET_ID_LENGTH
            ))));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.name.chars().count() > MAX_ASSET_NAME_LENGTH {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Asset name must be at most {} characters",
                MAX_ASSET_NAME_LENGTH
            ))));
        }
        if self.acquisition_value < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Acquisition value must be non-negative".to_string(),
            )));
        }
        if self.acquisition_value > MAX_ACQUISITION_VALUE {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Acquisition value must be at most {}",
                MAX_ACQUISITION_VALUE
            ))));
        }
        if self.useful_life < MIN_USEFUL_LIFE_YEARS {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Useful life must be at least {} year",
                MIN_USEFUL_LIFE_YEARS
            ))));
        }
        if self.start_use_date < self.acquisition_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Start use date must be on or after the acquisition date".to_string(),
            )));
        }

        let id_changed = !matches!(original_id, Some(original) if original == id);
        if id_changed && existing_ids.iter().any(|existing| existing == id) {
            return Err(Error::Validation(ValidationError::DuplicateId(
                id.to_string(),
            )));
        }
        Ok(())
    }

    /// Builds a fresh asset record with no depreciation calculated yet.
    pub fn into_asset(self) -> FixedAsset {
        FixedAsset {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            acquisition_date: self.acquisition_date,
            start_use_date: self.start_use_date,
            acquisition_value: self.acquisition_value,
            useful_life: self.useful_life,
            depreciation_method: self.depreciation_method,
            depreciation_value: None,
            depreciation_history: Vec::new(),
        }
    }
}

/// Dashboard figures for the whole register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FixedAssetsSummary {
    pub asset_count: usize,
    pub total_acquisition_cost: Decimal,
    /// Sum of each asset's cached `depreciation_value`
    pub total_accumulated_depreciation: Decimal,
    pub net_book_value: Decimal,
    /// Sum of every history posting across the register
    pub total_recorded_depreciation: Decimal,
}

/// Column an asset list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetSortKey {
    Id,
    Name,
    AcquisitionDate,
    StartUseDate,
    AcquisitionValue,
    UsefulLife,
    DepreciationMethod,
    DepreciationValue,
}

impl FromStr for AssetSortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "id" => Ok(AssetSortKey::Id),
            "name" => Ok(AssetSortKey::Name),
            "acquisitiondate" => Ok(AssetSortKey::AcquisitionDate),
            "startusedate" => Ok(AssetSortKey::StartUseDate),
            "acquisitionvalue" | "value" => Ok(AssetSortKey::AcquisitionValue),
            "usefullife" | "life" => Ok(AssetSortKey::UsefulLife),
            "depreciationmethod" | "method" => Ok(AssetSortKey::DepreciationMethod),
            "depreciationvalue" | "depreciation" => Ok(AssetSortKey::DepreciationValue),
            _ => Err(ValidationError::InvalidInput(format!(
                "unknown sort key '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}
