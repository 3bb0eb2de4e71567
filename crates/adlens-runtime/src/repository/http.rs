use adlens_types::{CampaignId, CampaignRecord, CampaignStatus, NewCampaign};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::CampaignRepository;
use crate::config::ApiConfig;
use crate::{Error, Result};

/// Campaign API client.
///
/// `GET /campaigns`, `GET /campaigns/{id}`, `GET /campaigns?status=` and
/// `POST /campaigns` relative to the configured base URL. Every request is
/// bounded by the client timeout; there are no retries.
#[derive(Debug, Clone)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid endpoint '{}': not a base URL",
                base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Server-side status query. The dashboard filters client-side instead.
    pub async fn list_by_status(&self, status: CampaignStatus) -> Result<Vec<CampaignRecord>> {
        let url = self.endpoint(&[])?;
        tracing::debug!(url = %url, status = %status, "GET campaigns by status");
        let response = self
            .client
            .get(url)
            .query(&[("status", status.as_str())])
            .send()
            .await?;
        decode(response).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::Config(format!("invalid endpoint '{}'", self.base_url)))?;
            path.pop_if_empty().push("campaigns");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl CampaignRepository for HttpRepository {
    async fn list(&self) -> Result<Vec<CampaignRecord>> {
        let url = self.endpoint(&[])?;
        tracing::debug!(url = %url, "GET campaigns");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn get(&self, id: &CampaignId) -> Result<CampaignRecord> {
        let id_segment = id.to_string();
        let url = self.endpoint(&[&id_segment])?;
        tracing::debug!(url = %url, "GET campaign");
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id_segment));
        }
        decode(response).await
    }

    async fn create(&self, draft: &NewCampaign) -> Result<CampaignRecord> {
        draft.validate()?;
        let url = self.endpoint(&[])?;
        tracing::debug!(url = %url, name = %draft.name, "POST campaign");
        let response = self.client.post(url).json(draft).send().await?;
        let created: CampaignRecord = decode(response).await?;
        tracing::info!(id = %created.id, "campaign created");
        Ok(created)
    }

    fn describe(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}
