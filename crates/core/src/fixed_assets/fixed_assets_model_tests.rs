//! Tests for fixed asset domain models.

#[cfg(test)]
mod tests {
    use crate::constants::MAX_ACQUISITION_VALUE;
    use crate::errors::{Error, ValidationError};
    use crate::fixed_assets::{
        AssetSortKey, DepreciationEntry, DepreciationMethod, FixedAsset, FixedAssetInput,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_input(id: &str) -> FixedAssetInput {
        FixedAssetInput {
            id: id.to_string(),
            name: "Office Chair".to_string(),
            acquisition_date: date(2023, 1, 10),
            start_use_date: date(2023, 2, 1),
            acquisition_value: dec!(1500000),
            useful_life: 4,
            depreciation_method: DepreciationMethod::StraightLine,
        }
    }

    fn assert_invalid_input(result: crate::Result<()>) {
        match result {
            Err(Error::Validation(ValidationError::InvalidInput(_))) => {}
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    // ==================== DepreciationMethod ====================

    #[test]
    fn test_depreciation_method_serialization() {
        assert_eq!(
            serde_json::to_string(&DepreciationMethod::StraightLine).unwrap(),
            "\"STRAIGHT_LINE\""
        );
        assert_eq!(
            serde_json::to_string(&DepreciationMethod::DecliningBalance).unwrap(),
            "\"DECLINING_BALANCE\""
        );
    }

    #[test]
    fn test_depreciation_method_rejects_unknown_value() {
        assert!(serde_json::from_str::<DepreciationMethod>("\"SUM_OF_YEARS\"").is_err());
        assert_eq!(
            DepreciationMethod::from_str("units-of-production"),
            Err(ValidationError::UnknownDepreciationMethod(
                "units-of-production".to_string()
            ))
        );
    }

    #[test]
    fn test_depreciation_method_from_str_spellings() {
        for s in ["STRAIGHT_LINE", "straight-line", " straight_line "] {
            assert_eq!(
                DepreciationMethod::from_str(s).unwrap(),
                DepreciationMethod::StraightLine
            );
        }
        assert_eq!(
            DepreciationMethod::from_str("declining-balance").unwrap(),
            DepreciationMethod::DecliningBalance
        );
    }

    #[test]
    fn test_depreciation_method_display() {
        assert_eq!(DepreciationMethod::StraightLine.to_string(), "Straight Line");
        assert_eq!(
            DepreciationMethod::DecliningBalance.to_string(),
            "Declining Balance"
        );
    }

    // ==================== FixedAsset ====================

    #[test]
    fn test_fixed_asset_deserializes_without_depreciation_fields() {
        let asset: FixedAsset = serde_json::from_value(json!({
            "id": "FA001",
            "name": "Forklift",
            "acquisitionDate": "2022-03-01",
            "startUseDate": "2022-03-15",
            "acquisitionValue": 250000000,
            "usefulLife": 8,
            "depreciationMethod": "DECLINING_BALANCE"
        }))
        .unwrap();

        assert_eq!(asset.depreciation_value, None);
        assert!(asset.depreciation_history.is_empty());
        assert_eq!(asset.acquisition_value, dec!(250000000));
        assert_eq!(asset.depreciation_method, DepreciationMethod::DecliningBalance);
    }

    #[test]
    fn test_fixed_asset_serializes_camel_case() {
        let mut asset = create_input("FA001").into_asset();
        asset.depreciation_history.push(DepreciationEntry {
            date: date(2024, 2, 1),
            amount: dec!(375000),
        });

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["startUseDate"], "2023-02-01");
        assert_eq!(value["depreciationMethod"], "STRAIGHT_LINE");
        assert_eq!(value["depreciationHistory"][0]["date"], "2024-02-01");
        assert!(value.get("depreciationValue").is_none());
    }

    #[test]
    fn test_book_value_and_running_book_values() {
        let mut asset = create_input("FA001").into_asset();
        assert_eq!(asset.book_value(), dec!(1500000));
        assert!(asset.running_book_values().is_empty());

        for amount in [dec!(750000), dec!(375000)] {
            asset.depreciation_history.push(DepreciationEntry {
                date: date(2024, 1, 1),
                amount,
            });
        }

        assert_eq!(asset.recorded_depreciation(), dec!(1125000));
        assert_eq!(asset.book_value(), dec!(375000));
        assert_eq!(
            asset.running_book_values(),
            vec![dec!(750000), dec!(375000)]
        );
    }

    #[test]
    fn test_book_value_is_not_clamped() {
        let mut asset = create_input("FA001").into_asset();
        asset.depreciation_history.push(DepreciationEntry {
            date: date(2024, 1, 1),
            amount: dec!(2000000),
        });
        assert_eq!(asset.book_value(), dec!(-500000));
    }

    // ==================== FixedAssetInput::validate ====================

    #[test]
    fn test_validate_accepts_valid_input() {
        let existing = vec!["FA002".to_string()];
        assert!(create_input("FA001").validate(None, &existing).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_id_on_create() {
        let existing = vec!["FA001".to_string()];
        match create_input("FA001").validate(None, &existing) {
            Err(Error::Validation(ValidationError::DuplicateId(id))) => assert_eq!(id, "FA001"),
            other => panic!("expected duplicate id, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_duplicate_check_on_edit() {
        let existing = vec!["FA001".to_string(), "FA002".to_string()];

        // Keeping its own ID is fine
        assert!(create_input("FA001")
            .validate(Some("FA001"), &existing)
            .is_ok());
        // Renaming onto another asset is not
        assert!(create_input("FA002")
            .validate(Some("FA001"), &existing)
            .is_err());
        // Renaming to a free ID is
        assert!(create_input("FA003")
            .validate(Some("FA001"), &existing)
            .is_ok());
    }

    #[test]
    fn test_validate_required_fields() {
        match create_input("   ").validate(None, &[]) {
            Err(Error::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, "id")
            }
            other => panic!("expected missing id, got {:?}", other),
        }

        let mut input = create_input("FA001");
        input.name = " ".to_string();
        assert!(matches!(
            input.validate(None, &[]),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_validate_lengths() {
        assert_invalid_input(create_input(&"X".repeat(21)).validate(None, &[]));
        assert!(create_input(&"X".repeat(20)).validate(None, &[]).is_ok());

        let mut input = create_input("FA001");
        input.name = "n".repeat(101);
        assert_invalid_input(input.validate(None, &[]));
    }

    #[test]
    fn test_validate_value_life_and_dates() {
        let mut input = create_input("FA001");
        input.acquisition_value = dec!(-1);
        assert_invalid_input(input.validate(None, &[]));

        let mut input = create_input("FA001");
        input.acquisition_value = dec!(0);
        assert!(input.validate(None, &[]).is_ok());

        let mut input = create_input("FA001");
        input.useful_life = 0;
        assert_invalid_input(input.validate(None, &[]));

        let mut input = create_input("FA001");
        input.start_use_date = date(2023, 1, 9);
        assert_invalid_input(input.validate(None, &[]));

        let mut input = create_input("FA001");
        input.start_use_date = input.acquisition_date;
        assert!(input.validate(None, &[]).is_ok());
    }

    #[test]
    fn test_validate_acquisition_value_limit() {
        let mut input = create_input("FA001");
        input.acquisition_value = MAX_ACQUISITION_VALUE;
        assert!(input.validate(None, &[]).is_ok());

        input.acquisition_value = MAX_ACQUISITION_VALUE + dec!(0.01);
        assert_invalid_input(input.validate(None, &[]));

        input.acquisition_value = Decimal::MAX;
        assert_invalid_input(input.validate(None, &[]));
    }

    #[test]
    fn test_into_asset_trims_and_starts_empty() {
        let mut input = create_input(" FA001 ");
        input.name = " Office Chair ".to_string();
        let asset = input.into_asset();

        assert_eq!(asset.id, "FA001");
        assert_eq!(asset.name, "Office Chair");
        assert_eq!(asset.depreciation_value, None);
        assert!(asset.depreciation_history.is_empty());
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(AssetSortKey::from_str("name").unwrap(), AssetSortKey::Name);
        assert_eq!(
            AssetSortKey::from_str("acquisition-date").unwrap(),
            AssetSortKey::AcquisitionDate
        );
        assert_eq!(
            AssetSortKey::from_str("depreciationValue").unwrap(),
            AssetSortKey::DepreciationValue
        );
        assert!(AssetSortKey::from_str("colour").is_err());
    }
}
