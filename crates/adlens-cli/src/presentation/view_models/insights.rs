use adlens_engine::Trend;
use adlens_types::CampaignId;
use serde::Serialize;

use super::campaign::SummaryViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct InsightsViewModel {
    pub summary: SummaryViewModel,
    pub best_performer: Option<BestPerformerViewModel>,
    pub performance: Vec<PerformanceEntryViewModel>,
    pub status_distribution: Vec<StatusShareViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BestPerformerViewModel {
    pub id: CampaignId,
    pub name: String,
    pub ctr: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceEntryViewModel {
    pub id: CampaignId,
    pub name: String,
    pub clicks: u64,
    pub cost: f64,
    pub ctr: Option<f64>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusShareViewModel {
    pub status: String,
    pub count: usize,
    /// Fraction in 0..=1; absent for an empty collection
    pub share: Option<f64>,
}
