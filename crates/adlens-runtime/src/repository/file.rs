use adlens_types::CampaignRecord;
use async_trait::async_trait;
use std::path::PathBuf;

use super::CampaignRepository;
use crate::Result;

/// Reads a JSON array of campaigns from disk, using the same schema as the
/// HTTP endpoint. The file is re-read on every load.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl CampaignRepository for FileRepository {
    async fn list(&self) -> Result<Vec<CampaignRecord>> {
        tracing::debug!(path = %self.path.display(), "reading campaign file");
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<CampaignRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
