use adlens_runtime::ViewConfig;
use adlens_types::{SortDirection, SortKey, StatusFilter};
use clap::Args;

use super::enums::{SortArg, StatusArg};

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (IDs only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all metrics)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Status filter and sort order for commands that print a campaign list
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    #[arg(long, help = "Only show campaigns with this status")]
    pub status: Option<StatusArg>,

    #[arg(long, help = "Sort column")]
    pub sort: Option<SortArg>,

    #[arg(long, help = "Sort in descending order")]
    pub desc: bool,
}

impl SelectionArgs {
    /// Merge flags over the configured defaults.
    ///
    /// `--desc` forces descending; an explicit `--sort` without it means
    /// ascending; otherwise the configured direction applies.
    pub fn resolve(&self, defaults: ViewConfig) -> (StatusFilter, SortKey, SortDirection) {
        let status_filter = self
            .status
            .map(StatusFilter::from)
            .unwrap_or(defaults.status_filter);
        let sort_key = self.sort.map(SortKey::from).unwrap_or(defaults.sort_key);
        let sort_direction = if self.desc {
            SortDirection::Descending
        } else if self.sort.is_some() {
            SortDirection::Ascending
        } else {
            defaults.sort_direction
        };
        (status_filter, sort_key, sort_direction)
    }
}
