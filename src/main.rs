mod config;
mod console;
mod db;
mod error;
mod logging;
mod menu;
mod models;
mod operations;

use clap::Parser;
use config::Args;
use console::Console;
use db::connection::ConnectionProvider;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let env_file = config::load_env_file();
    let args = Args::parse();

    if let Err(e) = logging::setup_logging(args.log_file.as_deref()) {
        eprintln!("Could not open log file: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = env_file {
        tracing::warn!("Could not load .env file: {e}");
        eprintln!("Warning: could not load .env file: {e}");
    }

    println!("╔════════════════════════════════════════╗");
    println!("║   EXPENSE TRACKER - CONSOLE APP        ║");
    println!("╚════════════════════════════════════════╝");
    println!();

    let mut provider = ConnectionProvider::new(args.db_config());
    if provider.acquire().is_err() {
        eprintln!("Failed to connect to database. Exiting...");
        return ExitCode::FAILURE;
    }
    println!("Database connected successfully!");

    let color = !args.no_color && io::stdout().is_terminal();
    let mut console = Console::new(io::stdin().lock(), io::stdout(), args.max_attempts)
        .with_currency(&args.currency)
        .with_color(color);

    let result = menu::run(&mut provider, &mut console);
    provider.release();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Expense tracker stopped: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
