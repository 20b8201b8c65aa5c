use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::{Error, Result};

/// Default timezone for book dates.
/// Used to turn the current instant into the calendar date depreciation is
/// calculated "as of" when the caller does not supply one.
pub const DEFAULT_BOOK_TZ: Tz = chrono_tz::Asia::Jakarta;

/// Converts a UTC instant to a book date in the given timezone.
pub fn book_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's book date in `tz`.
pub fn book_date_today(tz: Tz) -> NaiveDate {
    book_date_from_utc(Utc::now(), tz)
}

/// Parses an IANA timezone name such as `Asia/Jakarta`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| Error::InvalidConfigValue(format!("unknown timezone '{}'", name)))
}

/// Whole days from `start` to `end`; negative when `end` is earlier.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_book_date_from_utc_crosses_midnight() {
        // 20:00 UTC is already the next day in Jakarta (UTC+7)
        let instant = Utc.with_ymd_and_hms(2024, 3, 31, 20, 0, 0).unwrap();
        assert_eq!(
            book_date_from_utc(instant, DEFAULT_BOOK_TZ),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Berlin").unwrap(), chrono_tz::Europe::Berlin);
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_days_between_is_signed() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(days_between(a, b), 365);
        assert_eq!(days_between(b, a), -365);
    }
}
