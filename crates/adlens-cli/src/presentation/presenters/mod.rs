//! Presenters turn engine results into ViewModels.
//!
//! No formatting happens here: numbers stay numbers so JSON output carries
//! raw values. Badges and follow-up suggestions are decided here.

mod campaign;
mod dashboard;
mod insights;
mod system;

pub use campaign::{
    present_campaign_created, present_campaign_detail, present_campaign_list, present_export,
    present_summary,
};
pub use dashboard::present_dashboard;
pub use insights::present_insights;
pub use system::{present_config, present_config_init, present_guidance};
