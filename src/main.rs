use std::io;

mod cli;
use cli::{CliMode, parse_cli_mode, run_agenda_mode, run_map_json_mode};
mod tui;
use tui::run_tui;

use jamnodes::storage::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", cli::USAGE);
            return Ok(());
        }
    };

    if let CliMode::MapJson = cli_mode {
        return run_map_json_mode();
    }

    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;

    match cli_mode {
        CliMode::Agenda { offline } => run_agenda_mode(&config, offline).await,
        CliMode::Dashboard { offline } => run_tui(&config, offline).await,
        CliMode::MapJson => Ok(()),
    }
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "jamnodes.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("jamnodes started");
}
