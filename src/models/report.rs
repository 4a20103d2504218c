//! Report calendar entries and period units
//!
//! A [`ReportEntry`] is one dated row of the generated calendar. The persisted
//! JSON keeps the Russian field names and the `DD.MM.YYYY` date format of the
//! original calendar file, so existing data files stay readable.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OtchetnikError;

/// The calendar interval a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Month,
    Quarter,
    Year,
}

impl PeriodUnit {
    /// Number of months one period step advances
    pub fn months(&self) -> u32 {
        match self {
            Self::Month => 1,
            Self::Quarter => 3,
            Self::Year => 12,
        }
    }

    /// Format a period end date as the user-facing period label
    ///
    /// - month: `MM.YYYY`
    /// - quarter: `I кв. YYYY` .. `IV кв. YYYY`
    /// - year: `YYYY`
    pub fn format_label(&self, period_end: NaiveDate) -> String {
        match self {
            Self::Month => format!("{:02}.{}", period_end.month(), period_end.year()),
            Self::Quarter => {
                let quarter = (period_end.month() - 1) / 3 + 1;
                let numeral = match quarter {
                    1 => "I",
                    2 => "II",
                    3 => "III",
                    _ => "IV",
                };
                format!("{} кв. {}", numeral, period_end.year())
            }
            Self::Year => format!("{}", period_end.year()),
        }
    }
}

impl FromStr for PeriodUnit {
    type Err = OtchetnikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(OtchetnikError::InvalidInput(format!(
                "unsupported period unit: {} (expected month, quarter or year)",
                other
            ))),
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        };
        write!(f, "{}", s)
    }
}

/// One dated entry of the report calendar
///
/// Immutable once generated; the calendar keeps these sorted by due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Report name (e.g. "Декларация по УСН")
    #[serde(rename = "Название")]
    pub name: String,

    /// Submission deadline, already adjusted for weekends
    #[serde(rename = "Дата сдачи", with = "date_ddmmyyyy")]
    pub due_date: NaiveDate,

    /// Human-readable period label (e.g. "I кв. 2025")
    #[serde(rename = "Период сдачи")]
    pub period_label: String,

    /// Authority the report is filed with (e.g. "ФНС", "СФР")
    #[serde(rename = "Инстанция")]
    pub instance: String,
}

/// Serde adapter for the `DD.MM.YYYY` date format used in the calendar file
pub mod date_ddmmyyyy {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d.%m.%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Parse a user-supplied `DD.MM.YYYY` date
pub fn parse_ddmmyyyy(s: &str) -> Result<NaiveDate, OtchetnikError> {
    NaiveDate::parse_from_str(s, date_ddmmyyyy::FORMAT)
        .map_err(|_| OtchetnikError::InvalidInput(format!("invalid date (DD.MM.YYYY): {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!("month".parse::<PeriodUnit>().unwrap(), PeriodUnit::Month);
        assert_eq!("quarter".parse::<PeriodUnit>().unwrap(), PeriodUnit::Quarter);
        assert_eq!("year".parse::<PeriodUnit>().unwrap(), PeriodUnit::Year);

        let err = "week".parse::<PeriodUnit>().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_month_label() {
        assert_eq!(PeriodUnit::Month.format_label(date(2023, 3, 31)), "03.2023");
    }

    #[test]
    fn test_quarter_labels() {
        assert_eq!(
            PeriodUnit::Quarter.format_label(date(2023, 3, 31)),
            "I кв. 2023"
        );
        assert_eq!(
            PeriodUnit::Quarter.format_label(date(2023, 6, 30)),
            "II кв. 2023"
        );
        assert_eq!(
            PeriodUnit::Quarter.format_label(date(2023, 9, 30)),
            "III кв. 2023"
        );
        assert_eq!(
            PeriodUnit::Quarter.format_label(date(2023, 12, 31)),
            "IV кв. 2023"
        );
    }

    #[test]
    fn test_year_label() {
        assert_eq!(PeriodUnit::Year.format_label(date(2023, 12, 31)), "2023");
    }

    #[test]
    fn test_entry_serialization_keys() {
        let entry = ReportEntry {
            name: "Декларация по УСН".into(),
            due_date: date(2026, 3, 25),
            period_label: "2025".into(),
            instance: "ФНС".into(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["Название"], "Декларация по УСН");
        assert_eq!(json["Дата сдачи"], "25.03.2026");
        assert_eq!(json["Период сдачи"], "2025");
        assert_eq!(json["Инстанция"], "ФНС");

        let back: ReportEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_parse_ddmmyyyy() {
        assert_eq!(parse_ddmmyyyy("25.03.2026").unwrap(), date(2026, 3, 25));
        assert!(parse_ddmmyyyy("2026-03-25").unwrap_err().is_invalid_input());
    }
}
