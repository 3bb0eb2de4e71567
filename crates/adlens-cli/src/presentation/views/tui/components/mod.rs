//! Dashboard components
//!
//! Components own UI state and input handling; rendering goes through the
//! stateless views. Selection indices are clamped here, never in views.

pub mod campaign_table;
pub mod dashboard;

pub use campaign_table::CampaignTableComponent;
pub use dashboard::{DashboardAction, DashboardComponent};
