use adlens_types::CampaignRecord;
use async_trait::async_trait;

use super::CampaignRepository;
use crate::Result;

/// Serves a fixed collection (demo data, tests)
#[derive(Debug, Clone, Default)]
pub struct StaticRepository {
    records: Vec<CampaignRecord>,
    label: String,
}

impl StaticRepository {
    pub fn new(records: Vec<CampaignRecord>) -> Self {
        Self {
            records,
            label: "in-memory campaigns".to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[async_trait]
impl CampaignRepository for StaticRepository {
    async fn list(&self) -> Result<Vec<CampaignRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use adlens_types::{CampaignId, CampaignStatus, NewCampaign};

    fn records() -> Vec<CampaignRecord> {
        vec![
            CampaignRecord::new(1, "Summer Sale", CampaignStatus::Active, 150, 45.99, 1000),
            CampaignRecord::new("b-2", "Black Friday", CampaignStatus::Paused, 320, 89.5, 2500),
        ]
    }

    #[tokio::test]
    async fn test_get_scans_collection() {
        let repo = StaticRepository::new(records());
        let found = repo.get(&CampaignId::from("b-2")).await.unwrap();
        assert_eq!(found.name, "Black Friday");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = StaticRepository::new(records());
        let err = repo.get(&CampaignId::from(42)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(id) if id == "42"));
    }

    #[tokio::test]
    async fn test_create_is_unsupported() {
        let repo = StaticRepository::new(records()).with_label("demo data");
        let draft = NewCampaign {
            name: "Launch".to_string(),
            status: CampaignStatus::Active,
            clicks: 0,
            cost: 0.0,
            impressions: 0,
        };
        let err = repo.create(&draft).await.unwrap_err();
        assert!(err.to_string().contains("demo data is read-only"));
    }
}
