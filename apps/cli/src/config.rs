use std::path::PathBuf;
use std::str::FromStr;

use assetbook_core::utils::time_utils::{parse_timezone, DEFAULT_BOOK_TZ};
use assetbook_core::{Error, Result};
use chrono_tz::Tz;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rp";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::InvalidConfigValue(format!(
                "AB_LOG_FORMAT must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub seed_file: Option<PathBuf>,
    pub timezone: Tz,
    pub log_format: LogFormat,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            timezone: DEFAULT_BOOK_TZ,
            log_format: LogFormat::Text,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl Config {
    /// Reads `AB_*` variables, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed_file = lookup("AB_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let timezone = match lookup("AB_TIMEZONE") {
            Some(name) if !name.trim().is_empty() => parse_timezone(&name)?,
            _ => DEFAULT_BOOK_TZ,
        };
        let log_format = lookup("AB_LOG_FORMAT")
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or_default();
        let currency_symbol = lookup("AB_CURRENCY_SYMBOL")
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        Ok(Self {
            seed_file,
            timezone,
            log_format,
            currency_symbol,
        })
    }
}
