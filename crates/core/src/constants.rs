use rust_decimal::Decimal;

/// Length of a depreciation year in days. Leap years are not accounted for.
pub const DAYS_PER_YEAR: i64 = 365;

/// Multiplier applied to the straight-line rate for the declining-balance
/// method (double-declining balance).
pub const DECLINING_BALANCE_FACTOR: Decimal = Decimal::TWO;

/// Maximum length of an asset ID accepted by the asset form
pub const MAX_ASSET_ID_LENGTH: usize = 20;

/// Maximum length of an asset name accepted by the asset form
pub const MAX_ASSET_NAME_LENGTH: usize = 100;

/// Largest acquisition value accepted by the asset form (10^18).
///
/// Keeps every charge and register total well inside `Decimal`'s range.
/// Records added to the store directly are expected to respect it too.
pub const MAX_ACQUISITION_VALUE: Decimal =
    Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Minimum useful life, in years
pub const MIN_USEFUL_LIFE_YEARS: u32 = 1;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
