//! Campaign sources.
//!
//! The dashboard only needs one capability from a source: produce the full
//! campaign collection. Single lookups default to scanning that collection;
//! sources with a cheaper path (the HTTP API) override it.

mod file;
mod http;
mod memory;

pub use file::FileRepository;
pub use http::HttpRepository;
pub use memory::StaticRepository;

use adlens_types::{CampaignId, CampaignRecord, NewCampaign};
use async_trait::async_trait;

use crate::{Error, Result};

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Fetch every campaign
    async fn list(&self) -> Result<Vec<CampaignRecord>>;

    async fn get(&self, id: &CampaignId) -> Result<CampaignRecord> {
        self.list()
            .await?
            .into_iter()
            .find(|record| &record.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    async fn create(&self, _draft: &NewCampaign) -> Result<CampaignRecord> {
        Err(Error::Unsupported(format!(
            "{} is read-only; creating campaigns requires an HTTP endpoint",
            self.describe()
        )))
    }

    /// Human-readable origin, shown in status lines
    fn describe(&self) -> String;
}
