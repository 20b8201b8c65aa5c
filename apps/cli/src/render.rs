//! Plain-text rendering of register data.

use std::fmt::Write;

use assetbook_core::constants::DISPLAY_DECIMAL_PRECISION;
use assetbook_core::{
    DepreciationCharge, DepreciationScheduleRow, FixedAsset, FixedAssetsSummary,
};
use numfmt::{Formatter, Precision};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Formats money with a currency prefix, thousands separators and a fixed
/// number of decimals.
pub struct CurrencyFormatter {
    symbol: String,
    positive: Formatter,
    negative: Formatter,
}

impl CurrencyFormatter {
    pub fn new(symbol: &str) -> anyhow::Result<Self> {
        let precision = Precision::Decimals(DISPLAY_DECIMAL_PRECISION as u8);
        let positive = Formatter::currency(symbol)
            .map_err(|_| anyhow::anyhow!("Invalid currency symbol '{}'", symbol))?
            .precision(precision);
        let negative = Formatter::currency(&format!("-{symbol}"))
            .map_err(|_| anyhow::anyhow!("Invalid currency symbol '{}'", symbol))?
            .precision(precision);

        Ok(Self {
            symbol: symbol.to_string(),
            positive,
            negative,
        })
    }

    pub fn format(&self, amount: Decimal) -> String {
        let number = amount
            .round_dp(DISPLAY_DECIMAL_PRECISION)
            .to_f64()
            .unwrap_or_default();

        let formatted = if number < 0.0 {
            self.negative.fmt_string(number.abs())
        } else if number > 0.0 {
            self.positive.fmt_string(number)
        } else {
            // numfmt renders zero as a bare "0"
            format!("{}0", self.symbol)
        };
        pad_decimals(formatted)
    }
}

/// numfmt drops trailing zeros after the decimal point.
fn pad_decimals(mut formatted: String) -> String {
    let precision = DISPLAY_DECIMAL_PRECISION as usize;
    let decimals = match formatted.rfind('.') {
        Some(dot) => formatted.len() - dot - 1,
        None => {
            formatted.push('.');
            0
        }
    };
    for _ in decimals..precision {
        formatted.push('0');
    }
    formatted
}

fn describe_charge(charge: Option<DepreciationCharge>, currency: &CurrencyFormatter) -> String {
    match charge {
        Some(DepreciationCharge::Cumulative(amount)) => {
            format!("{} to date", currency.format(amount))
        }
        Some(DepreciationCharge::Period(amount)) => {
            format!("{} this period", currency.format(amount))
        }
        Some(DepreciationCharge::NotDue) => "no period due".to_string(),
        None => "skipped".to_string(),
    }
}

fn optional_amount(amount: Option<Decimal>, currency: &CurrencyFormatter) -> String {
    amount.map_or_else(|| "-".to_string(), |amount| currency.format(amount))
}

pub fn asset_table(assets: &[FixedAsset], currency: &CurrencyFormatter) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20}  {:<30}  {:<10}  {:<10}  {:>20}  {:>4}  {:<17}  {:>20}",
        "ID", "NAME", "ACQUIRED", "IN USE", "VALUE", "LIFE", "METHOD", "DEPRECIATION"
    );
    for asset in assets {
        let _ = writeln!(
            out,
            "{:<20}  {:<30}  {:<10}  {:<10}  {:>20}  {:>4}  {:<17}  {:>20}",
            asset.id,
            asset.name,
            asset.acquisition_date.to_string(),
            asset.start_use_date.to_string(),
            currency.format(asset.acquisition_value),
            asset.useful_life,
            asset.depreciation_method.label(),
            optional_amount(asset.depreciation_value, currency),
        );
    }
    let _ = write!(out, "{} assets", assets.len());
    out
}

pub fn asset_detail(asset: &FixedAsset, currency: &CurrencyFormatter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", asset.name, asset.id);
    let _ = writeln!(out, "  Acquired:           {}", asset.acquisition_date);
    let _ = writeln!(out, "  In use since:       {}", asset.start_use_date);
    let _ = writeln!(
        out,
        "  Acquisition value:  {}",
        currency.format(asset.acquisition_value)
    );
    let _ = writeln!(out, "  Useful life:        {} years", asset.useful_life);
    let _ = writeln!(out, "  Method:             {}", asset.depreciation_method);
    let _ = writeln!(
        out,
        "  Last depreciation:  {}",
        optional_amount(asset.depreciation_value, currency)
    );
    let _ = writeln!(
        out,
        "  Book value:         {}",
        currency.format(asset.book_value())
    );

    if asset.depreciation_history.is_empty() {
        let _ = write!(out, "  No depreciation posted");
        return out;
    }
    let _ = write!(out, "  History:");
    for (entry, book_value) in asset
        .depreciation_history
        .iter()
        .zip(asset.running_book_values())
    {
        let _ = write!(
            out,
            "\n    {}  {:>20}  {:>20}",
            entry.date,
            currency.format(entry.amount),
            currency.format(book_value)
        );
    }
    out
}

pub fn charges(results: &[(String, Option<DepreciationCharge>)], currency: &CurrencyFormatter) -> String {
    results
        .iter()
        .map(|(id, charge)| format!("{:<20}  {}", id, describe_charge(*charge, currency)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn schedule(rows: &[DepreciationScheduleRow], currency: &CurrencyFormatter) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20}  {:<30}  {:<17}  {:>6}  {:<10}  {:>20}  {:>20}",
        "ID", "NAME", "METHOD", "PERIOD", "POSTED", "AMOUNT", "BOOK VALUE"
    );
    for row in rows {
        let period = row.period.map_or_else(|| "-".to_string(), |p| p.to_string());
        let posted = row
            .posting_date
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let _ = writeln!(
            out,
            "{:<20}  {:<30}  {:<17}  {:>6}  {:<10}  {:>20}  {:>20}",
            row.asset_id,
            row.asset_name,
            row.depreciation_method.label(),
            period,
            posted,
            optional_amount(row.amount, currency),
            optional_amount(row.book_value, currency),
        );
    }
    let _ = write!(out, "{} rows", rows.len());
    out
}

pub fn summary(summary: &FixedAssetsSummary, currency: &CurrencyFormatter) -> String {
    [
        format!("Assets:                    {}", summary.asset_count),
        format!(
            "Total acquisition cost:    {}",
            currency.format(summary.total_acquisition_cost)
        ),
        format!(
            "Accumulated depreciation:  {}",
            currency.format(summary.total_accumulated_depreciation)
        ),
        format!(
            "Net book value:            {}",
            currency.format(summary.net_book_value)
        ),
        format!(
            "Recorded depreciation:     {}",
            currency.format(summary.total_recorded_depreciation)
        ),
    ]
    .join("\n")
}
