use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::AppSettings;
use crate::config::AppConfig;
use crate::error::Result;
use crate::screens::Route;
use crate::{logging, program};

#[derive(Debug, Parser)]
#[command(
    name = "insight",
    about = "InSight study planner: today's schedule, calendar, and tools in the terminal",
    version
)]
pub struct Cli {
    /// TOML config file. Missing keys use defaults.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Screen to open first.
    #[arg(long, value_enum, default_value_t = StartScreen::Login)]
    pub screen: StartScreen,

    /// Fixed seed for the background gradient.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs here (overrides `[logging].file`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    Login,
    Home,
    Menu,
    Stats,
    Memo,
}

impl StartScreen {
    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Self::Login => Route::Login,
            Self::Home => Route::Home,
            Self::Menu => Route::Menu,
            Self::Stats => Route::Stats,
            Self::Memo => Route::Memo,
        }
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

/// Effective config: file (or defaults) plus command-line overrides, validated.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_toml_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = &cli.log_file {
        config.logging.file = Some(path.clone());
    }
    Ok(config.validated()?)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    logging::init(&config.logging)?;
    tracing::info!(screen = ?cli.screen, seed = ?cli.seed, "starting");

    let settings = AppSettings::from_config(&config, cli.seed);
    program::run(settings, cli.screen.route(), config.tick())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::{Cli, StartScreen, load_config};
    use crate::error::InsightError;

    #[test]
    fn defaults_parse() {
        let cli = Cli::try_parse_from(["insight"]).expect("parse");
        assert_eq!(cli.screen, StartScreen::Login);
        assert!(cli.config.is_none());
        assert!(!cli.print_config);
        assert_eq!(load_config(&cli).expect("config").tick_ms, 16);
    }

    #[test]
    fn screen_and_seed_flags() {
        let cli = Cli::try_parse_from(["insight", "--screen", "stats", "--seed", "7"]).expect("parse");
        assert_eq!(cli.screen, StartScreen::Stats);
        assert_eq!(cli.seed, Some(7));
        assert!(Cli::try_parse_from(["insight", "--screen", "nowhere"]).is_err());
    }

    #[test]
    fn log_file_flag_overrides_config() {
        let cli = Cli::try_parse_from(["insight", "--log-file", "/tmp/insight-test.log"]).expect("parse");
        let config = load_config(&cli).expect("config");
        assert_eq!(
            config.logging.file.as_deref(),
            Some(std::path::Path::new("/tmp/insight-test.log"))
        );
    }

    #[test]
    fn invalid_config_file_exits_with_two() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "tick_ms = 0").expect("write");
        let cli = Cli::try_parse_from(["insight", "--config", file.path().to_str().expect("utf8")])
            .expect("parse");
        let error = load_config(&cli).expect_err("validation should fail");
        assert!(matches!(error, InsightError::Config(_)));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let cli = Cli::try_parse_from(["insight", "-c", "/nonexistent/insight.toml"]).expect("parse");
        assert!(matches!(load_config(&cli), Err(InsightError::Config(_))));
    }
}
