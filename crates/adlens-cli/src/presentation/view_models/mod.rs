pub mod campaign;
pub mod common;
pub mod dashboard;
pub mod insights;
pub mod result;
pub mod system;

pub use campaign::{
    CampaignCreatedViewModel, CampaignDetailViewModel, CampaignListViewModel,
    CampaignRowViewModel, ExportViewModel, SummaryViewModel,
};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use dashboard::{DashboardScreenViewModel, LoadPhase, LoadStatusViewModel};
pub use insights::{
    BestPerformerViewModel, InsightsViewModel, PerformanceEntryViewModel, StatusShareViewModel,
};
pub use result::CommandResultViewModel;
pub use system::{ConfigInitViewModel, ConfigViewModel, GuidanceViewModel};

use std::fmt;

/// Bridge from a ViewModel to its text rendering for a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
