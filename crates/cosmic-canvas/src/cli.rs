use clap::{Parser, Subcommand};
use cosmic_core::Telescope;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cosmic-canvas")]
#[command(version)]
#[command(about = "Browse JWST and Hubble imagery and NASA's Astronomy Picture of the Day")]
pub struct Cli {
    /// Path to a JSON config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the Astronomy Picture of the Day
    Apod {
        /// Date in YYYY-MM-DD format (today if omitted)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recent telescope observations with preview links
    Gallery {
        /// JWST or HST
        #[arg(short, long, default_value = "jwst", value_parser = parse_telescope)]
        telescope: Telescope,

        /// Maximum number of observations
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=100))]
        limit: Option<u64>,

        /// Target name filter, e.g. "Orion Nebula"
        #[arg(short, long)]
        filter: Option<String>,

        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare famous objects as seen by both telescopes
    Compare {
        /// Object name (lists all pairs if omitted)
        name: Option<String>,
    },

    /// Check connectivity to the APOD and MAST services
    Check,

    /// Show the effective configuration
    Config,

    /// Print version information
    Version,
}

fn parse_telescope(value: &str) -> Result<Telescope, String> {
    value.parse::<Telescope>().map_err(|e| e.to_string())
}
