//! Report calendar: projection and queries
//!
//! The calendar is an ordered collection of [`ReportEntry`], append-only
//! during generation and always sorted ascending by due date. Projection is
//! an offline batch step; queries run on the interactive path.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{PeriodUnit, ReportEntry};
use crate::reports::rules::{add_months, adjust_for_weekend, ReportRule};

/// Entries for one due date, grouped by instance, in sorted order
pub type GroupedEntries = BTreeMap<NaiveDate, BTreeMap<String, Vec<ReportEntry>>>;

/// An ordered collection of report entries sorted by due date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportCalendar {
    entries: Vec<ReportEntry>,
}

impl ReportCalendar {
    /// Create an empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calendar from already-generated entries, restoring the sort
    /// invariant (source data might not be pre-sorted)
    pub fn from_entries(mut entries: Vec<ReportEntry>) -> Self {
        sort_entries(&mut entries);
        Self { entries }
    }

    /// Project `n_periods` of a report rule into dated entries
    ///
    /// For each period i, the period end advances by i units from
    /// `period_end`, the rule computes the raw deadline, and the due date is
    /// the weekend-adjusted deadline. One entry is appended per period.
    pub fn project(
        &mut self,
        rule: &ReportRule,
        period_end: NaiveDate,
        n_periods: u32,
        unit: PeriodUnit,
    ) {
        for i in 0..n_periods {
            let period_end_i = add_months(period_end, i * unit.months());
            let raw_deadline = rule.deadline(period_end_i);
            let due_date = adjust_for_weekend(raw_deadline);

            self.entries.push(ReportEntry {
                name: rule.name.to_string(),
                due_date,
                period_label: unit.format_label(period_end_i),
                instance: rule.instance.to_string(),
            });
        }
    }

    /// Sort entries ascending by (due date, instance)
    pub fn sort(&mut self) {
        sort_entries(&mut self.entries);
    }

    /// All entries in current order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Entries with `from <= due_date <= to`, sorted ascending.
    /// An empty result is a normal empty Vec, not an error.
    pub fn entries_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<ReportEntry> {
        let mut result: Vec<ReportEntry> = self
            .entries
            .iter()
            .filter(|e| e.due_date >= from && e.due_date <= to)
            .cloned()
            .collect();
        sort_entries(&mut result);
        result
    }

    /// Entries due exactly on the given date
    pub fn entries_on(&self, date: NaiveDate) -> Vec<ReportEntry> {
        self.entries_in_range(date, date)
    }

    /// Group entries by due date and instance for presentation
    pub fn grouped_by_date_and_instance(entries: &[ReportEntry]) -> GroupedEntries {
        let mut grouped: GroupedEntries = BTreeMap::new();
        for entry in entries {
            grouped
                .entry(entry.due_date)
                .or_default()
                .entry(entry.instance.clone())
                .or_default()
                .push(entry.clone());
        }
        grouped
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the calendar holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sort_entries(entries: &mut [ReportEntry]) {
    entries.sort_by(|a, b| {
        a.due_date
            .cmp(&b.due_date)
            .then_with(|| a.instance.cmp(&b.instance))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::rules::DeadlineRule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usn_rule() -> ReportRule {
        ReportRule {
            name: "Декларация по УСН",
            instance: "ФНС",
            rule: DeadlineRule::MonthAfterYearEnd { month: 3, day: 25 },
        }
    }

    fn quarterly_rule() -> ReportRule {
        ReportRule {
            name: "6-НДФЛ",
            instance: "ФНС",
            rule: DeadlineRule::NextMonthDay { day: 25 },
        }
    }

    #[test]
    fn test_project_produces_n_entries_per_unit() {
        for (unit, n) in [
            (PeriodUnit::Month, 12u32),
            (PeriodUnit::Quarter, 4),
            (PeriodUnit::Year, 3),
        ] {
            let mut calendar = ReportCalendar::new();
            calendar.project(&quarterly_rule(), date(2025, 1, 31), n, unit);
            assert_eq!(calendar.len(), n as usize);

            // Strictly increasing period offsets -> strictly increasing due dates
            let dues: Vec<_> = calendar.entries().iter().map(|e| e.due_date).collect();
            for pair in dues.windows(2) {
                assert!(pair[0] < pair[1], "{:?} not increasing for {:?}", dues, unit);
            }
        }
    }

    #[test]
    fn test_usn_scenario() {
        // Period end 31.12.2025 -> raw deadline 25.03.2026 (a Wednesday,
        // so the adjusted due date equals the raw deadline)
        let mut calendar = ReportCalendar::new();
        calendar.project(&usn_rule(), date(2025, 12, 31), 1, PeriodUnit::Year);

        let entry = &calendar.entries()[0];
        assert_eq!(entry.due_date, date(2026, 3, 25));
        assert_eq!(entry.period_label, "2025");
        assert_eq!(entry.instance, "ФНС");
    }

    #[test]
    fn test_project_adjusts_weekend_deadline() {
        // Year ending 31.12.2022: raw USN deadline 25.03.2023 is a Saturday,
        // due date moves to Monday 27.03.2023
        let mut calendar = ReportCalendar::new();
        calendar.project(&usn_rule(), date(2022, 12, 31), 1, PeriodUnit::Year);
        assert_eq!(calendar.entries()[0].due_date, date(2023, 3, 27));
    }

    #[test]
    fn test_quarter_labels_advance() {
        let mut calendar = ReportCalendar::new();
        calendar.project(&quarterly_rule(), date(2025, 3, 31), 4, PeriodUnit::Quarter);

        let labels: Vec<_> = calendar
            .entries()
            .iter()
            .map(|e| e.period_label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["I кв. 2025", "II кв. 2025", "III кв. 2025", "IV кв. 2025"]
        );
    }

    #[test]
    fn test_entries_in_range_inclusive() {
        let mut calendar = ReportCalendar::new();
        calendar.project(&quarterly_rule(), date(2025, 3, 31), 4, PeriodUnit::Quarter);
        calendar.sort();

        let first_due = calendar.entries()[0].due_date;
        let last_due = calendar.entries()[3].due_date;

        // Both ends inclusive
        assert_eq!(calendar.entries_in_range(first_due, last_due).len(), 4);
        assert_eq!(calendar.entries_in_range(first_due, first_due).len(), 1);
    }

    #[test]
    fn test_entries_in_range_empty_result() {
        let mut calendar = ReportCalendar::new();
        calendar.project(&usn_rule(), date(2025, 12, 31), 1, PeriodUnit::Year);

        let result = calendar.entries_in_range(date(2020, 1, 1), date(2020, 12, 31));
        assert!(result.is_empty());
    }

    #[test]
    fn test_from_entries_restores_sort() {
        let mut calendar = ReportCalendar::new();
        calendar.project(&quarterly_rule(), date(2025, 3, 31), 4, PeriodUnit::Quarter);

        let mut shuffled = calendar.entries().to_vec();
        shuffled.reverse();

        let restored = ReportCalendar::from_entries(shuffled);
        let mut sorted = calendar.clone();
        sorted.sort();
        assert_eq!(restored.entries(), sorted.entries());
    }

    #[test]
    fn test_grouping_by_date_and_instance() {
        let mut calendar = ReportCalendar::new();
        calendar.project(&quarterly_rule(), date(2025, 3, 31), 1, PeriodUnit::Quarter);
        let mut other = quarterly_rule();
        other.name = "ЕФС-1";
        other.instance = "СФР";
        calendar.project(&other, date(2025, 3, 31), 1, PeriodUnit::Quarter);

        let grouped = ReportCalendar::grouped_by_date_and_instance(calendar.entries());
        assert_eq!(grouped.len(), 1);
        let by_instance = grouped.values().next().unwrap();
        assert_eq!(by_instance.len(), 2);
        assert!(by_instance.contains_key("ФНС"));
        assert!(by_instance.contains_key("СФР"));
    }
}
