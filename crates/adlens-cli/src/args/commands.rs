use super::common::{SelectionArgs, ViewModeArgs};
use super::enums::CampaignStatusArg;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List campaigns, filtered by status and sorted by a column")]
    List {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show total clicks, cost and impressions across all campaigns")]
    Summary {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show performance insights across all campaigns")]
    Insights {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show a single campaign")]
    Show {
        #[arg(help = "Campaign id")]
        id: String,
    },

    #[command(about = "Create a campaign through the API")]
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "active")]
        status: CampaignStatusArg,

        #[arg(long, default_value = "0")]
        clicks: u64,

        #[arg(long, default_value = "0")]
        cost: f64,

        #[arg(long, default_value = "0")]
        impressions: u64,
    },

    #[command(about = "Export campaigns as CSV")]
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(
            long,
            short,
            value_name = "FILE",
            help = "Write to FILE instead of stdout"
        )]
        output: Option<PathBuf>,
    },

    #[command(about = "Open the interactive dashboard")]
    Dashboard {
        #[arg(
            long,
            value_name = "FILE",
            help = "Append logs to FILE while the dashboard is open"
        )]
        log_file: Option<PathBuf>,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration and where it was loaded from")]
    Show,

    #[command(about = "Write a config file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
