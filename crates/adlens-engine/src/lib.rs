// Engine module - Core reduction pipeline (filter, sort, aggregate, view state)
// This layer sits between fetched records (types) and CLI presentation

pub mod aggregate;
pub mod filter;
pub mod insights;
pub mod sort;
pub mod validate;
pub mod view_state;

pub use aggregate::{
    AggregateResult, aggregate, best_performer, click_through_rate, cost_per_click,
};
pub use filter::filter_by_status;
pub use insights::{
    CampaignPerformance, InsightsReport, StatusCount, StatusDistribution, TREND_CLICK_THRESHOLD,
    Trend, build_insights, status_distribution, trend,
};
pub use sort::{compare_records, sort_records};
pub use validate::validate_collection;
pub use view_state::{LoadState, LoadTicket, SharedRecord, ViewState, compute_visible};
