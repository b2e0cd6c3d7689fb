use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DB_URL: &str = "sqlite://expense_tracker.db";

/// Console expense tracker backed by SQLite.
///
/// Every database setting can also be given through the environment or a
/// `.env` file in the working directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Database to open. Either a file path, `sqlite://<path>` or `:memory:`.
    #[arg(long, env = "DB_URL", default_value = DEFAULT_DB_URL)]
    pub db_url: String,

    /// Database user, recorded in the logs.
    #[arg(long, env = "DB_USER", default_value = "root")]
    pub db_user: String,

    /// Database password. SQLite has no credentials, so this is ignored.
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Symbol printed in front of amounts.
    #[arg(long, env = "EXPENSE_CURRENCY", default_value = "₹")]
    pub currency: String,

    /// How many invalid answers a prompt accepts before giving up.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,

    /// Append DEBUG level logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print success and failure messages without colour.
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.db_url.clone(),
            user: self.db_user.clone(),
            password: self.db_password.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// The path handed to SQLite, with any `sqlite:` scheme removed.
    pub fn database_path(&self) -> &str {
        let url = self.url.trim();
        url.strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DB_URL.to_string(),
            user: "root".to_string(),
            password: String::new(),
        }
    }
}

/// Loads `.env` from the working directory into the environment. A missing
/// file is not an error.
pub fn load_env_file() -> Result<(), dotenvy::Error> {
    ignore_missing(dotenvy::dotenv().map(|_| ()))
}

fn ignore_missing(result: Result<(), dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}
