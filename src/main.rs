use chrono::Local;
use clap::Parser;
use dotenvy::dotenv;
use expense_tracker::{
    cli,
    config::{self, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH},
    core::ExpenseTracker,
    errors::Result,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Track expenses for this session and see where the money went.
///
/// Nothing is saved: all expenses live in memory until you quit.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Category configuration file (TOML). The built-in categories are used if it does not exist.
    #[arg(long, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log verbosity when RUST_LOG is not set: off, error, warn, info, debug, trace
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    // 1. Load .env file (as early as possible, so RUST_LOG and the config path can come from it)
    let dotenv_loaded = dotenv().is_ok(); // Non-fatal, env vars can be set externally

    // 2. Initialize tracing; logs go to stderr so they stay out of the prompt
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_string())),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(dotenv_loaded, "Attempted to load .env file.");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // 3. Load the category configuration
    let app_config = config::load_app_configuration(&args.config)?;
    info!("Successfully processed application configuration.");

    // 4. Run the interactive session against a fresh tracker
    let mut tracker = ExpenseTracker::new(app_config.categories);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    cli::run(&mut tracker, stdin.lock(), &mut stdout, || {
        Local::now().date_naive()
    })
}
