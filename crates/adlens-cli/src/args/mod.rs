mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adlens")]
#[command(about = "Inspect marketing campaign performance from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "ADLENS_ENDPOINT",
        help = "Campaign API base URL (overrides api.base_url)"
    )]
    pub endpoint: Option<String>,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        conflicts_with = "demo",
        help = "Read campaigns from a JSON file instead of the API"
    )]
    pub source: Option<PathBuf>,

    #[arg(long, global = true, help = "Use the built-in sample campaigns")]
    pub demo: bool,

    #[arg(long, global = true, value_name = "FILE", help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
