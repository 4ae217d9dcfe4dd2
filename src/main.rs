use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use snapview::domain::entities::Person;
use snapview::domain::mvvm::compose;
use snapview::infrastructure::{AppConfig, CliArgs, ConfigStore};
use snapview::presentation::theme::Theme;
use snapview::presentation::ui::{App, PersonScreen, PersonScreenStyle};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let store = ConfigStore::new()?;
    let mut config = store.load(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn build_screen(config: &AppConfig) -> PersonScreen {
    // The single hard-coded record this example displays.
    let person = Person::new(
        "Mrs",
        "Theresa",
        "May",
        "8 Downing Street",
        "London",
        "SW1A 2AA",
        "United Kingdom",
    );

    let theme = Theme::new(&config.theme.accent_color);
    let style = PersonScreenStyle {
        padding: config.ui.padding,
        section_spacing: config.ui.section_spacing,
        show_title_bar: config.ui.show_title_bar,
        ..PersonScreenStyle::from_theme(&theme)
    };

    compose::<PersonScreen>(person).style(style)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = snapview::VERSION, "Starting snapview");

    let app = App::new(build_screen(&config));

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
