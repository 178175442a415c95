use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// TMY typical meteorological year generator.
#[derive(Parser)]
#[command(
    name = "tmy",
    version,
    about = "Typical meteorological year generator for station hourly records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build typical, cold-winter and hot-summer years for every station.
    Generate(GenerateArgs),
    /// Report station coordinates, available years and eligibility.
    Inventory(InventoryArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tmy.toml")]
    pub config: PathBuf,

    /// Override input directory from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the minimum qualifying-year count from config.
    #[arg(long)]
    pub min_years: Option<usize>,
}

/// Arguments for the `inventory` subcommand.
#[derive(clap::Args)]
pub struct InventoryArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tmy.toml")]
    pub config: PathBuf,

    /// Override input directory from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override station registry CSV from config.
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Override inventory output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
