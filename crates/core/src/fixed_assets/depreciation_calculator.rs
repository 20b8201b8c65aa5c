use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fixed_assets_model::{DepreciationEntry, DepreciationMethod, FixedAsset};
use crate::constants::{DAYS_PER_YEAR, DECLINING_BALANCE_FACTOR};
use crate::utils::time_utils::days_between;

/// Outcome of one depreciation calculation.
///
/// The two methods do not produce the same kind of figure: straight-line
/// yields depreciation accumulated from start of use through the as-of date,
/// while declining balance yields the charge for one newly elapsed period.
/// Both are cached in `depreciation_value` and posted to the same history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum DepreciationCharge {
    /// Straight-line depreciation to date, capped at the acquisition value.
    Cumulative(Decimal),
    /// Declining-balance charge for the next period.
    Period(Decimal),
    /// Declining balance with no new period elapsed; nothing was changed.
    NotDue,
}

impl DepreciationCharge {
    /// The charged amount. `NotDue` charges nothing.
    pub fn amount(&self) -> Decimal {
        match self {
            DepreciationCharge::Cumulative(amount) | DepreciationCharge::Period(amount) => *amount,
            DepreciationCharge::NotDue => Decimal::ZERO,
        }
    }

    pub fn is_due(&self) -> bool {
        !matches!(self, DepreciationCharge::NotDue)
    }
}

/// Fractional years from `start_use_date` to `as_of`, counting 365-day years.
///
/// Negative when `as_of` precedes the start of use.
pub fn years_used(start_use_date: NaiveDate, as_of: NaiveDate) -> Decimal {
    Decimal::from(days_between(start_use_date, as_of)) / Decimal::from(DAYS_PER_YEAR)
}

/// Straight-line depreciation accumulated after `years_used` years.
///
/// Returns `None` for a zero useful life or when the product overflows.
pub fn straight_line_charge(
    acquisition_value: Decimal,
    useful_life: u32,
    years_used: Decimal,
) -> Option<Decimal> {
    let life = Decimal::from(useful_life);
    acquisition_value
        .checked_mul(years_used.min(life))?
        .checked_div(life)
}

/// Annual declining-balance rate: `2 / useful_life`.
pub fn declining_balance_rate(useful_life: u32) -> Option<Decimal> {
    DECLINING_BALANCE_FACTOR.checked_div(Decimal::from(useful_life))
}

/// One period's declining-balance charge on the current book value.
///
/// Returns `None` for a zero useful life or when the product overflows.
pub fn declining_balance_charge(book_value: Decimal, useful_life: u32) -> Option<Decimal> {
    declining_balance_rate(useful_life).and_then(|rate| book_value.checked_mul(rate))
}

/// Whether a new period may be posted.
///
/// The number of postings already in the history stands in for the number of
/// periods already charged, so a period is due once `years_used` exceeds it.
pub fn is_period_due(years_used: Decimal, posted_periods: usize) -> bool {
    years_used > Decimal::from(posted_periods as u64)
}

/// Calculates depreciation for `asset` as of `as_of` and records it.
///
/// When a charge is produced it becomes the asset's `depreciation_value`, and
/// it is appended to the history if a period is due. A declining-balance call
/// with no period due leaves the asset untouched and returns
/// [`DepreciationCharge::NotDue`].
///
/// Returns `None` when no charge can be computed: a zero useful life, or a
/// value too large for `Decimal`. Form validation rules both out.
pub fn apply_depreciation(asset: &mut FixedAsset, as_of: NaiveDate) -> Option<DepreciationCharge> {
    let years = years_used(asset.start_use_date, as_of);
    let due = is_period_due(years, asset.depreciation_history.len());

    let charge = match asset.depreciation_method {
        DepreciationMethod::StraightLine => {
            straight_line_charge(asset.acquisition_value, asset.useful_life, years)
                .map(DepreciationCharge::Cumulative)
        }
        DepreciationMethod::DecliningBalance if !due => return Some(DepreciationCharge::NotDue),
        DepreciationMethod::DecliningBalance => {
            declining_balance_charge(asset.book_value(), asset.useful_life)
                .map(DepreciationCharge::Period)
        }
    };

    let Some(charge) = charge else {
        warn!(
            "Skipping depreciation for asset {}: no charge for value {} over {} years",
            asset.id,
            asset.acquisition_value,
            asset.useful_life
        );
        return None;
    };

    if due {
        asset.depreciation_history.push(DepreciationEntry {
            date: as_of,
            amount: charge.amount(),
        });
    }
    asset.depreciation_value = Some(charge.amount());

    debug!(
        "Depreciation for {} as of {}: {:?} ({} years used, {} postings)",
        asset.id,
        as_of,
        charge,
        years,
        asset.depreciation_history.len()
    );
    Some(charge)
}
