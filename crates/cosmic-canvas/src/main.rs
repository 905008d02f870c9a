mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use cosmic_core::Config;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Compare { name } => commands::compare::run(name.as_deref()),
        command => {
            let config = Config::load(cli.config.as_deref())?;
            run_with_config(command, &config, cli.config.as_deref())
        }
    }
}

fn run_with_config(
    command: Commands,
    config: &Config,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    match command {
        Commands::Apod { date } => commands::apod::run(config, date.as_deref()),
        Commands::Gallery {
            telescope,
            limit,
            filter,
            json,
        } => {
            let limit = limit.map_or(config.default_limit, |l| l as usize);
            commands::gallery::run(config, telescope, limit, filter.as_deref(), json)
        }
        Commands::Check => commands::check::run(config),
        Commands::Config => commands::config::run(config, config_path),
        Commands::Version => commands::version::run(),
        Commands::Compare { name } => commands::compare::run(name.as_deref()),
    }
}
