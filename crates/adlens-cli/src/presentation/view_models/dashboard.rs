use serde::Serialize;

use super::campaign::{CampaignListViewModel, SummaryViewModel};
use super::common::StatusLevel;
use super::insights::InsightsViewModel;

/// Snapshot of everything the dashboard draws in one frame
#[derive(Debug, Clone, Serialize)]
pub struct DashboardScreenViewModel {
    pub source: String,
    pub load: LoadStatusViewModel,
    /// Totals over all campaigns, independent of the filter
    pub summary: SummaryViewModel,
    pub table: CampaignListViewModel,
    /// Present while the insights overlay is open
    pub insights: Option<InsightsViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadStatusViewModel {
    pub phase: LoadPhase,
    pub level: StatusLevel,
    pub message: String,
    /// Local time of the last successful load, `HH:MM:SS`
    pub loaded_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed,
}
