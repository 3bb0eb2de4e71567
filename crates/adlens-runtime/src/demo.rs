//! Built-in sample campaigns for `--demo` and offline exploration.

use adlens_types::{CampaignRecord, CampaignStatus};

use crate::repository::StaticRepository;

pub fn sample_campaigns() -> Vec<CampaignRecord> {
    use CampaignStatus::{Active, Paused};

    vec![
        CampaignRecord::new(1, "Summer Sale", Active, 150, 45.99, 1000),
        CampaignRecord::new(2, "Black Friday", Paused, 320, 89.50, 2500),
        CampaignRecord::new(3, "Holiday Special", Active, 215, 62.25, 1750),
        CampaignRecord::new(4, "Spring Collection", Active, 180, 53.75, 1200),
        CampaignRecord::new(5, "Clearance Event", Paused, 95, 32.40, 800),
        CampaignRecord::new(6, "Back to School", Active, 230, 67.80, 1900),
        CampaignRecord::new(7, "Winter Sale", Paused, 175, 49.99, 1350),
        CampaignRecord::new(8, "New Year Promotion", Active, 290, 82.15, 2200),
        CampaignRecord::new(9, "Flash Sale", Paused, 120, 38.60, 950),
        CampaignRecord::new(10, "Product Launch", Active, 350, 95.75, 2800),
    ]
}

pub fn demo_repository() -> StaticRepository {
    StaticRepository::new(sample_campaigns()).with_label("demo data")
}
