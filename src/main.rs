use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cinescout::config::{Config, ConfigStore};
use cinescout::logging;
use cinescout::ui::runtime;

/// Find movie metadata by title and pin your current position on a map,
/// without leaving the terminal.
#[derive(Debug, Parser)]
#[command(name = "cinescout", version, about)]
struct Cli {
    /// Path to the configuration file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the log file (defaults to the platform data dir).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.clone()).context("failed to initialize logging")?;

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from '{}'", config_path.display()))?;
    let store = ConfigStore::new(config, config_path);

    tracing::info!(config = %store.path().display(), "starting cinescout");
    runtime::run(store)
}
