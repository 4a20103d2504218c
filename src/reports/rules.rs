//! Deadline rules for government reports
//!
//! Each report type maps a period end date to a raw submission deadline via a
//! pure [`DeadlineRule`]. Raw deadlines falling on a weekend are moved to the
//! next Monday by [`adjust_for_weekend`], which is applied to deadlines only,
//! never to period ends.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::PeriodUnit;

/// How a submission deadline is derived from a period end date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineRule {
    /// Fixed month/day of the year following the period end
    /// (annual filings: USN 25.03, accounting 31.03, military forms 15.09)
    MonthAfterYearEnd { month: u32, day: u32 },

    /// Fixed day of the month after the period end, wrapping the year
    /// (quarterly and monthly 25th filings)
    NextMonthDay { day: u32 },
}

impl DeadlineRule {
    /// Compute the raw (unadjusted) deadline for a period ending on
    /// `period_end`. Pure date arithmetic, no error conditions.
    pub fn deadline(&self, period_end: NaiveDate) -> NaiveDate {
        match *self {
            Self::MonthAfterYearEnd { month, day } => {
                ymd_clamped(period_end.year() + 1, month, day)
            }
            Self::NextMonthDay { day } => {
                let next = add_months(period_end, 1);
                ymd_clamped(next.year(), next.month(), day)
            }
        }
    }
}

/// One report type: a name, the authority it is filed with, and its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRule {
    pub name: &'static str,
    pub instance: &'static str,
    pub rule: DeadlineRule,
}

impl ReportRule {
    /// Compute the raw deadline for a period end
    pub fn deadline(&self, period_end: NaiveDate) -> NaiveDate {
        self.rule.deadline(period_end)
    }
}

/// A built-in report rule paired with its natural generation recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledRule {
    pub rule: ReportRule,
    pub unit: PeriodUnit,
    /// Periods generated per projected year
    pub periods_per_year: u32,
}

/// Move a weekend date to the following Monday
///
/// Saturday advances 2 days, Sunday advances 1 day, weekdays are unchanged.
/// Idempotent: the result is never a weekend.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Add `n` calendar months, clamping the day to the target month's length
/// (31.01 + 1 month = 28.02 or 29.02)
pub fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + n as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    ymd_clamped(year, month, date.day())
}

/// Build a date with the day clamped into the month
fn ymd_clamped(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| last_day_of_month(year, month))
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.expect("valid first of month") - Duration::days(1)
}

/// The built-in catalog of report types with their instances and schedules
///
/// Mirrors the standard filing set for a small business on the simplified
/// tax regime: annual filings to ФНС and Военкомат, quarterly filings to
/// ФНС and СФР, and the monthly personnel report.
pub fn builtin_rules() -> Vec<ScheduledRule> {
    let annual = |name, instance, month, day| ScheduledRule {
        rule: ReportRule {
            name,
            instance,
            rule: DeadlineRule::MonthAfterYearEnd { month, day },
        },
        unit: PeriodUnit::Year,
        periods_per_year: 1,
    };
    let quarterly = |name, instance| ScheduledRule {
        rule: ReportRule {
            name,
            instance,
            rule: DeadlineRule::NextMonthDay { day: 25 },
        },
        unit: PeriodUnit::Quarter,
        periods_per_year: 4,
    };

    vec![
        annual("Декларация по УСН", "ФНС", 3, 25),
        annual("Бухгалтерская отчетность", "ФНС", 3, 31),
        annual("Подтверждение ОВЭД", "СФР", 4, 15),
        annual("Форма № 6", "Военкомат", 9, 15),
        annual("Форма № 18", "Военкомат", 9, 15),
        annual("Форма № 19", "Военкомат", 9, 15),
        quarterly("Уведомление о налогах для ЕНП", "ФНС"),
        quarterly("6-НДФЛ", "ФНС"),
        quarterly("Расчет по страховым взносам (РСВ)", "ФНС"),
        quarterly("ЕФС-1", "СФР"),
        ScheduledRule {
            rule: ReportRule {
                name: "Персонифицированные сведения (ПСВ)",
                instance: "ФНС",
                rule: DeadlineRule::NextMonthDay { day: 25 },
            },
            unit: PeriodUnit::Month,
            periods_per_year: 12,
        },
    ]
}
