use anyhow::Result;
use clap::{Parser, Subcommand};

use otchetnik::cli::{
    handle_calendar_command, handle_faq_command, handle_survey_command, CalendarCommands,
    FaqCommands, SurveyCommands,
};
use otchetnik::config::{paths::OtchetnikPaths, Settings};
use otchetnik::services::CalendarService;
use otchetnik::storage::Storage;

#[derive(Parser)]
#[command(
    name = "otchetnik",
    version,
    about = "Report-deadline calendar and survey assistant for small businesses",
    long_about = "otchetnik keeps a calendar of recurring government-report deadlines \
                  (ФНС, СФР, Военкомат), walks branching recommendation surveys and \
                  browses the FAQ of a small-business accounting assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize settings and generate the report calendar
    Init,

    /// Report calendar commands
    #[command(subcommand, alias = "cal")]
    Calendar(CalendarCommands),

    /// Survey commands
    #[command(subcommand)]
    Survey(SurveyCommands),

    /// FAQ commands
    #[command(subcommand)]
    Faq(FaqCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OtchetnikPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Commands::Init => {
            let mut settings = settings;
            settings.setup_completed = true;
            settings.save(&paths)?;

            let service = CalendarService::new(&storage.calendar);
            let calendar = service.generate(&settings)?;
            println!(
                "Готово: настройки в {}, календарь на {} записей.",
                paths.settings_file().display(),
                calendar.len()
            );
        }
        Commands::Calendar(cmd) => handle_calendar_command(&storage, &settings, cmd)?,
        Commands::Survey(cmd) => handle_survey_command(&storage, cmd)?,
        Commands::Faq(cmd) => handle_faq_command(&storage, cmd)?,
        Commands::Config => {
            println!("Базовая директория: {}", paths.base_dir().display());
            println!("Файл настроек:     {}", paths.settings_file().display());
            println!("Календарь:         {}", paths.calendar_file().display());
            println!("Опросники:         {}", paths.surveys_file().display());
            println!("FAQ:               {}", paths.faq_file().display());
            println!();
            println!("Базовый год:       {}", settings.base_year);
            println!("Горизонт, лет:     {}", settings.horizon_years);
            println!("Уведомления, дней: {}", settings.notify_days_ahead);
        }
    }

    Ok(())
}
