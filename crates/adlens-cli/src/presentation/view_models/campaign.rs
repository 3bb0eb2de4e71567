use adlens_engine::Trend;
use adlens_types::CampaignId;
use serde::Serialize;

/// One campaign as shown in lists and detail views
#[derive(Debug, Clone, Serialize)]
pub struct CampaignRowViewModel {
    pub id: CampaignId,
    pub name: String,
    pub status: String,
    pub clicks: u64,
    pub cost: f64,
    pub impressions: u64,
    /// Percent; absent without impressions
    pub ctr: Option<f64>,
    /// Cost per click; absent without clicks
    pub cpc: Option<f64>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignListViewModel {
    pub campaigns: Vec<CampaignRowViewModel>,
    /// Size of the collection before filtering
    pub total_count: usize,
    pub status_filter: String,
    pub sort_key: String,
    pub sort_direction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignDetailViewModel {
    pub campaign: CampaignRowViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignCreatedViewModel {
    pub campaign: CampaignRowViewModel,
    pub endpoint: String,
}

/// Totals behind the three summary cards
#[derive(Debug, Clone, Serialize)]
pub struct SummaryViewModel {
    pub campaign_count: usize,
    pub total_clicks: u64,
    pub total_cost: f64,
    pub total_impressions: u64,
    pub ctr: Option<f64>,
    pub cpc: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportViewModel {
    pub exported_count: usize,
    pub output_path: String,
}
