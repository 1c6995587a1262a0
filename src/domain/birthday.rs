//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Year assumed for birthdays entered without one.
const DEFAULT_YEAR: i32 = 1900;

/// The date layouts a birthday may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `day/month`
    DayMonthSlash,
    /// `day/month/year`
    DayMonthYearSlash,
    /// `day-month`
    DayMonthDash,
    /// `day-month-year`
    DayMonthYearDash,
}

impl DateFormat {
    /// All accepted formats, in the order they are tried.
    pub const ALL: [DateFormat; 4] = [
        DateFormat::DayMonthSlash,
        DateFormat::DayMonthYearSlash,
        DateFormat::DayMonthDash,
        DateFormat::DayMonthYearDash,
    ];

    /// The strftime-style pattern for this format.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthSlash => "%d/%m",
            Self::DayMonthYearSlash => "%d/%m/%Y",
            Self::DayMonthDash => "%d-%m",
            Self::DayMonthYearDash => "%d-%m-%Y",
        }
    }

    fn separator(self) -> char {
        match self {
            Self::DayMonthSlash | Self::DayMonthYearSlash => '/',
            Self::DayMonthDash | Self::DayMonthYearDash => '-',
        }
    }

    fn has_year(self) -> bool {
        matches!(self, Self::DayMonthYearSlash | Self::DayMonthYearDash)
    }

    /// Parse `raw` strictly in this format.
    ///
    /// Formats without a year resolve to 1900, so `29/02` is rejected.
    /// A year must be exactly four ASCII digits.
    pub fn parse(self, raw: &str) -> Option<NaiveDate> {
        if self.has_year() {
            let year = raw.rsplit(self.separator()).next()?;
            if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            return NaiveDate::parse_from_str(raw, self.pattern()).ok();
        }
        let sep = self.separator();
        let with_year = format!("{raw}{sep}{DEFAULT_YEAR}");
        let pattern = format!("%d{sep}%m{sep}%Y");
        NaiveDate::parse_from_str(&with_year, &pattern).ok()
    }

    /// Comma-separated list of every accepted pattern.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|f| f.pattern())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// A validated birthday together with the format it was written in.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, DateFormat};
///
/// let birthday = Birthday::new("24-08-1991").unwrap();
/// assert_eq!(birthday.format(), DateFormat::DayMonthYearDash);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    format: DateFormat,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday. Formats are tried in [`DateFormat::ALL`] order
    /// and the first one that parses is remembered.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when no format matches.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        for format in DateFormat::ALL {
            if let Some(date) = format.parse(&raw) {
                return Ok(Self { raw, format, date });
            }
        }

        Err(ValidationError::InvalidBirthday(raw))
    }

    /// Validate a replacement value, producing a new birthday.
    pub fn revalidate(&self, raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    /// The birthday exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The format the birthday matched.
    pub fn format(&self) -> DateFormat {
        self.format
    }

    /// The parsed date; the year is 1900 when none was given.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days from `today` until this birthday's month and day.
    ///
    /// Zero means today. A date already passed this year wraps forward by
    /// 365 days plus one when `today`'s year is a leap year. A 29 February
    /// birthday falls on 28 February in non-leap years.
    pub fn days_from(&self, today: NaiveDate) -> i64 {
        let year = today.year();
        let candidate = NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(today);

        let difference = (candidate - today).num_days();
        if difference < 0 {
            difference + 365 + i64::from(is_leap_year(year))
        } else {
            difference
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_each_format_is_remembered() {
        let cases = [
            ("01/02", DateFormat::DayMonthSlash),
            ("01/02/1990", DateFormat::DayMonthYearSlash),
            ("01-02", DateFormat::DayMonthDash),
            ("01-02-1990", DateFormat::DayMonthYearDash),
        ];
        for (raw, format) in cases {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.format(), format, "format for {raw}");
            assert_eq!(birthday.as_str(), raw);
            assert_eq!(birthday.date().month(), 2);
            assert_eq!(birthday.date().day(), 1);
        }
    }

    #[test]
    fn test_single_digit_fields_are_accepted() {
        let birthday = Birthday::new("5/7").unwrap();
        assert_eq!(birthday.date(), ymd(1900, 7, 5));
    }

    #[test]
    fn test_year_is_kept() {
        let birthday = Birthday::new("24-08-1991").unwrap();
        assert_eq!(birthday.date(), ymd(1991, 8, 24));
    }

    #[test]
    fn test_invalid_birthday_lists_all_formats() {
        let cases = [
            "", "0102", "1.2.1990", "32/01", "01/13", "01/02/", "tomorrow", "01/02-1990",
            "01/02/19", "01/02/5", "01/02/-100", "01/02/+1990", "01-02-19900", "01-02- 199",
        ];
        for raw in cases {
            let err = Birthday::new(raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidBirthday(raw.to_string()));
            assert_eq!(
                err.to_string(),
                "The birthday wasn't added, it should be in one of the formats: %d/%m, %d/%m/%Y, %d-%m, %d-%m-%Y"
            );
        }
    }

    #[test]
    fn test_leap_day_without_year_is_rejected() {
        assert!(Birthday::new("29/02").is_err());
        assert!(Birthday::new("29/02/2000").is_ok());
    }

    #[test]
    fn test_days_from_today_is_zero() {
        let birthday = Birthday::new("19/10").unwrap();
        assert_eq!(birthday.days_from(ymd(2026, 10, 19)), 0);
    }

    #[test]
    fn test_days_from_upcoming() {
        let birthday = Birthday::new("20/10/1980").unwrap();
        assert_eq!(birthday.days_from(ymd(2026, 10, 19)), 1);
    }

    #[test]
    fn test_days_from_passed_uses_current_year_leap_status() {
        let birthday = Birthday::new("18/10").unwrap();
        assert_eq!(birthday.days_from(ymd(2026, 10, 19)), 364);
        assert_eq!(birthday.days_from(ymd(2024, 10, 19)), 365);
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = Birthday::new("29-02-2000").unwrap();
        assert_eq!(birthday.days_from(ymd(2026, 2, 27)), 1);
        assert_eq!(birthday.days_from(ymd(2028, 2, 27)), 2);
    }

    #[test]
    fn test_birthday_revalidate() {
        let birthday = Birthday::new("01/01").unwrap();

        let replaced = birthday.revalidate("02-03-1999").unwrap();
        assert_eq!(replaced.as_str(), "02-03-1999");
        assert_eq!(replaced.format(), DateFormat::DayMonthYearDash);

        assert!(matches!(
            birthday.revalidate("03.02"),
            Err(ValidationError::InvalidBirthday(_))
        ));
        assert_eq!(birthday.as_str(), "01/01");
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::new("01/01").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01/01\"");

        let back: Birthday = serde_json::from_str("\"01-01-2001\"").unwrap();
        assert_eq!(back.format(), DateFormat::DayMonthYearDash);

        let bad: Result<Birthday, _> = serde_json::from_str("\"soon\"");
        assert!(bad.is_err());
    }
}
