//! Sample campaign collections.

use adlens_types::{CampaignRecord, CampaignStatus};

/// The two-record example used throughout the docs: 470 clicks, $135.49,
/// 3,500 impressions.
pub fn pair() -> Vec<CampaignRecord> {
    vec![
        CampaignRecord::new(1, "Summer Sale", CampaignStatus::Active, 150, 45.99, 1000),
        CampaignRecord::new(2, "Black Friday", CampaignStatus::Paused, 320, 89.5, 2500),
    ]
}

/// Mixed statuses, one record without impressions, one string id.
pub fn mixed() -> Vec<CampaignRecord> {
    vec![
        CampaignRecord::new(1, "Summer Sale", CampaignStatus::Active, 150, 45.99, 1000),
        CampaignRecord::new(2, "Black Friday", CampaignStatus::Paused, 320, 89.5, 2500),
        CampaignRecord::new(3, "Cyber Monday", CampaignStatus::Active, 420, 102.25, 3000),
        CampaignRecord::new("launch-7", "Product Launch", CampaignStatus::Active, 0, 12.0, 0),
    ]
}

/// The full ten-record demo set shipped with the binary.
pub fn demo() -> Vec<CampaignRecord> {
    adlens_runtime::sample_campaigns()
}

pub fn to_json(records: &[CampaignRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}
