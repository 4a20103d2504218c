//! Calendar CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::calendar::{format_entry_list, format_grouped};
use crate::error::OtchetnikResult;
use crate::models::parse_ddmmyyyy;
use crate::services::CalendarService;
use crate::storage::Storage;

/// Calendar subcommands
#[derive(Subcommand)]
pub enum CalendarCommands {
    /// Regenerate the report calendar from the built-in report catalog
    Generate {
        /// First reporting year (defaults to the configured base year)
        #[arg(long)]
        year: Option<i32>,
        /// Years of deadlines to project (defaults to the configured horizon)
        #[arg(long)]
        horizon: Option<u32>,
    },
    /// Show reports due on a specific date
    Due {
        /// Date in DD.MM.YYYY format
        date: String,
    },
    /// Show reports due inside a date range
    Range {
        /// Range start in DD.MM.YYYY format (inclusive)
        #[arg(long)]
        from: String,
        /// Range end in DD.MM.YYYY format (inclusive)
        #[arg(long)]
        to: String,
    },
    /// Show the upcoming-reports digest relative to today
    Upcoming {
        /// Days ahead to look (defaults to the configured notice window)
        #[arg(long)]
        days: Option<u32>,
    },
}

/// Handle a calendar command
pub fn handle_calendar_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CalendarCommands,
) -> OtchetnikResult<()> {
    let service = CalendarService::new(&storage.calendar);

    match cmd {
        CalendarCommands::Generate { year, horizon } => {
            let mut effective = settings.clone();
            if let Some(year) = year {
                effective.base_year = year;
            }
            if let Some(horizon) = horizon {
                effective.horizon_years = horizon;
            }

            let calendar = service.generate(&effective)?;
            println!(
                "Календарь сгенерирован: {} записей, {} — {} гг.",
                calendar.len(),
                effective.base_year,
                effective.base_year + effective.horizon_years as i32 - 1
            );
        }
        CalendarCommands::Due { date } => {
            storage.calendar.load()?;
            let date = parse_ddmmyyyy(&date)?;
            let entries = service.due_on(date)?;
            println!("{}", format_entry_list(&entries));
        }
        CalendarCommands::Range { from, to } => {
            storage.calendar.load()?;
            let from = parse_ddmmyyyy(&from)?;
            let to = parse_ddmmyyyy(&to)?;
            let entries = service.due_in_range(from, to)?;
            println!("{}", format_grouped(&entries));
        }
        CalendarCommands::Upcoming { days } => {
            storage.calendar.load()?;
            let today = chrono::Local::now().date_naive();
            let days = days.unwrap_or(settings.notify_days_ahead);

            match service.upcoming_digest(today, days, None)? {
                Some(digest) => println!("{}", digest),
                None => println!("В ближайшие {} дн. отчетов нет.", days),
            }
        }
    }

    Ok(())
}
