//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `memorial_core` wiring end to end: open the store, seed it when
//!   empty, and print the rendered list grid.
//! - Keep output deterministic apart from timestamps in seeded ids.

use clap::Parser;
use log::{error, info};
use memorial_core::db::{open_db, open_db_in_memory};
use memorial_core::{
    init_logging_from_config, AppConfig, ListService, PageRepository, SqliteKvStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "memorial_cli",
    version,
    about = "Open a memorial page store and print its page list"
)]
struct CliArgs {
    /// SQLite file to open; the store lives in memory when omitted.
    #[arg(value_name = "DB_PATH", conflicts_with = "config")]
    db_path: Option<PathBuf>,

    /// JSON config file (database path, logging, demo seeding).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl CliArgs {
    fn app_config(&self) -> Result<AppConfig, String> {
        if let Some(path) = &self.config {
            return AppConfig::load(path).map_err(|err| err.to_string());
        }
        Ok(AppConfig {
            database_path: self.db_path.clone(),
            ..AppConfig::default()
        })
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error");
            eprintln!("memorial_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), String> {
    let config = args.app_config()?;
    init_logging_from_config(&config).map_err(|err| err.to_string())?;

    println!("memorial_core version={}", memorial_core::core_version());

    let mut conn = match &config.database_path {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
    .map_err(|err| err.to_string())?;

    let repo = PageRepository::new(SqliteKvStore::new(&mut conn));
    let list =
        ListService::open(repo, config.seed_demo_when_empty).map_err(|err| err.to_string())?;
    info!(
        "event=cli_run module=cli status=ok pages={}",
        list.pages().len()
    );

    println!("pages={}", list.pages().len());
    println!("{}", list.render_grid().html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::error::ErrorKind;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn positional_path_becomes_database_path() {
        let args = CliArgs::try_parse_from(["memorial_cli", "pages.db"]).unwrap();
        let config = args.app_config().unwrap();
        assert_eq!(config.database_path, Some(PathBuf::from("pages.db")));
        assert!(config.seed_demo_when_empty);
    }

    #[test]
    fn no_arguments_keep_store_in_memory() {
        let args = CliArgs::try_parse_from(["memorial_cli"]).unwrap();
        assert_eq!(args.app_config().unwrap().database_path, None);
    }

    #[test]
    fn config_flag_conflicts_with_path_and_needs_a_value() {
        let both = CliArgs::try_parse_from(["memorial_cli", "a.db", "--config", "c.json"])
            .unwrap_err();
        assert_eq!(both.kind(), ErrorKind::ArgumentConflict);

        let missing = CliArgs::try_parse_from(["memorial_cli", "--config"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::InvalidValue);
    }
}
