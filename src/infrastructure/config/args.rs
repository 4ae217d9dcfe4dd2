use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "snapview",
    version,
    about = "A snapshot-binding MVVM person details viewer for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Outer padding around the content block.
    #[arg(long)]
    pub padding: Option<u16>,

    /// Blank rows between the name and address sections.
    #[arg(long)]
    pub section_spacing: Option<u16>,

    /// Show the title bar chrome.
    #[arg(long)]
    pub title_bar: Option<bool>,
}
