//! Calendar service
//!
//! Regenerates the report calendar from the built-in rule catalog and builds
//! the upcoming-reports digest used for daily notifications. Generation is an
//! offline batch step; queries run on the interactive path.

use chrono::{Duration, NaiveDate};

use crate::config::Settings;
use crate::error::OtchetnikResult;
use crate::models::ReportEntry;
use crate::reports::{builtin_rules, ReportCalendar};
use crate::services::notify::NotificationSink;
use crate::storage::CalendarRepository;

/// Icon shown next to an instance name in the digest
fn instance_icon(instance: &str) -> &'static str {
    match instance {
        "ФНС" => "🏛️",
        "СФР" => "👥",
        "Военкомат" => "🪖",
        _ => "",
    }
}

/// Business logic for the report calendar
pub struct CalendarService<'a> {
    repo: &'a CalendarRepository,
}

impl<'a> CalendarService<'a> {
    pub fn new(repo: &'a CalendarRepository) -> Self {
        Self { repo }
    }

    /// Regenerate the whole calendar from the built-in catalog and persist it
    ///
    /// Every rule is projected from the end of `base_year`'s first period
    /// across `horizon_years` years at its natural cadence.
    pub fn generate(&self, settings: &Settings) -> OtchetnikResult<ReportCalendar> {
        let mut calendar = ReportCalendar::new();

        for scheduled in builtin_rules() {
            let period_end = first_period_end(settings.base_year, scheduled.unit.months());
            let n_periods = scheduled.periods_per_year * settings.horizon_years;
            calendar.project(&scheduled.rule, period_end, n_periods, scheduled.unit);
        }

        calendar.sort();
        self.repo.replace(calendar.clone())?;
        self.repo.save()?;
        Ok(calendar)
    }

    /// Entries due exactly on a date
    pub fn due_on(&self, date: NaiveDate) -> OtchetnikResult<Vec<ReportEntry>> {
        Ok(self.repo.calendar()?.entries_on(date))
    }

    /// Entries due inside an inclusive date range
    pub fn due_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> OtchetnikResult<Vec<ReportEntry>> {
        Ok(self.repo.calendar()?.entries_in_range(from, to))
    }

    /// Build the upcoming-reports digest text for the window
    /// `(today, today + days_ahead]`, optionally filtered to the instances a
    /// user subscribed to. Returns None when nothing is due.
    pub fn upcoming_digest(
        &self,
        today: NaiveDate,
        days_ahead: u32,
        active_instances: Option<&[String]>,
    ) -> OtchetnikResult<Option<String>> {
        let from = today + Duration::days(1);
        let to = today + Duration::days(days_ahead as i64);
        let mut entries = self.due_in_range(from, to)?;

        if let Some(active) = active_instances {
            entries.retain(|e| active.contains(&e.instance));
        }
        if entries.is_empty() {
            return Ok(None);
        }

        Ok(Some(render_digest(&entries)))
    }

    /// Digest of reports due exactly today (used when the advance window is
    /// disabled), with the same instance filtering
    pub fn today_digest(
        &self,
        today: NaiveDate,
        active_instances: Option<&[String]>,
    ) -> OtchetnikResult<Option<String>> {
        let mut entries = self.due_on(today)?;

        if let Some(active) = active_instances {
            entries.retain(|e| active.contains(&e.instance));
        }
        if entries.is_empty() {
            return Ok(None);
        }

        Ok(Some(render_digest(&entries)))
    }

    /// Send the appropriate digest to one user through the sink.
    /// Returns true when something was sent.
    pub fn notify_user(
        &self,
        sink: &dyn NotificationSink,
        user_id: i64,
        today: NaiveDate,
        days_ahead: u32,
        active_instances: Option<&[String]>,
    ) -> OtchetnikResult<bool> {
        let digest = if days_ahead > 0 {
            self.upcoming_digest(today, days_ahead, active_instances)?
        } else {
            self.today_digest(today, active_instances)?
        };

        match digest {
            Some(text) => {
                sink.send(user_id, Some(&text), &[])?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Render entries grouped by due date and instance into the digest text
fn render_digest(entries: &[ReportEntry]) -> String {
    let grouped = ReportCalendar::grouped_by_date_and_instance(entries);
    let mut lines: Vec<String> = Vec::new();

    for (due_date, by_instance) in &grouped {
        lines.push(format!("📅 {}", due_date.format("%d.%m.%Y")));
        for (instance, reports) in by_instance {
            lines.push(format!("{} {}:", instance_icon(instance), instance));
            for report in reports {
                lines.push(format!("  • {} ({})", report.name, report.period_label));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}

/// Last day of the first period of the year for a cadence of `months` months
fn first_period_end(year: i32, months: u32) -> NaiveDate {
    let month = months.min(12);
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.expect("valid first of month") - Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notify::test_support::RecordingSink;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        _temp: TempDir,
        path: std::path::PathBuf,
        repo: CalendarRepository,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("report_calendar.json");
            let repo = CalendarRepository::new(path.clone());
            Self {
                _temp: temp,
                path,
                repo,
            }
        }
    }

    #[test]
    fn test_first_period_end() {
        assert_eq!(first_period_end(2025, 1), date(2025, 1, 31));
        assert_eq!(first_period_end(2025, 3), date(2025, 3, 31));
        assert_eq!(first_period_end(2025, 12), date(2025, 12, 31));
    }

    #[test]
    fn test_generate_covers_catalog() {
        let fixture = Fixture::new();
        let service = CalendarService::new(&fixture.repo);

        let settings = Settings {
            base_year: 2025,
            horizon_years: 2,
            ..Settings::default()
        };
        let calendar = service.generate(&settings).unwrap();

        // 6 annual + 4 quarterly (x4) + 1 monthly (x12) per year, 2 years
        assert_eq!(calendar.len(), (6 + 4 * 4 + 12) * 2);

        // Persisted and reloadable
        let fresh = CalendarRepository::new(fixture.path.clone());
        fresh.load().unwrap();
        assert_eq!(fresh.calendar().unwrap().len(), calendar.len());
    }

    #[test]
    fn test_upcoming_digest_window_and_filter() {
        let fixture = Fixture::new();
        let service = CalendarService::new(&fixture.repo);
        service
            .generate(&Settings {
                base_year: 2025,
                horizon_years: 1,
                ..Settings::default()
            })
            .unwrap();

        // 25.04.2025 is a Friday: quarterly ФНС reports and СФР ЕФС-1 due
        let today = date(2025, 4, 22);
        let digest = service.upcoming_digest(today, 3, None).unwrap().unwrap();
        assert!(digest.contains("25.04.2025"));
        assert!(digest.contains("ФНС"));
        assert!(digest.contains("ЕФС-1"));

        // Filtered to СФР only
        let filtered = service
            .upcoming_digest(today, 3, Some(&["СФР".to_string()]))
            .unwrap()
            .unwrap();
        assert!(filtered.contains("ЕФС-1"));
        assert!(!filtered.contains("6-НДФЛ"));

        // A quiet window produces no digest
        assert!(service
            .upcoming_digest(date(2025, 5, 2), 3, None)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_notify_user_sends_once() {
        let fixture = Fixture::new();
        let service = CalendarService::new(&fixture.repo);
        service
            .generate(&Settings {
                base_year: 2025,
                horizon_years: 1,
                ..Settings::default()
            })
            .unwrap();

        let sink = RecordingSink::default();
        let sent = service
            .notify_user(&sink, 42, date(2025, 4, 22), 3, None)
            .unwrap();
        assert!(sent);
        assert_eq!(sink.sent.lock().unwrap().len(), 1);

        // Nothing due -> nothing sent
        let quiet = service
            .notify_user(&sink, 42, date(2025, 5, 2), 3, None)
            .unwrap();
        assert!(!quiet);
    }

    #[test]
    fn test_due_on_empty_is_ok() {
        let fixture = Fixture::new();
        let service = CalendarService::new(&fixture.repo);
        assert!(service.due_on(date(2025, 1, 1)).unwrap().is_empty());
    }
}
