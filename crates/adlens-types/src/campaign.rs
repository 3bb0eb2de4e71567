use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CampaignStatus, Error, Result};

/// Campaign identifier as issued by the backend.
///
/// The endpoint may use integer or string ids; both are accepted and
/// compared exactly (`1` and `"1"` are different ids).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CampaignId {
    Number(i64),
    Text(String),
}

impl CampaignId {
    /// Interpret user input: integers become `Number`, anything else `Text`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => CampaignId::Number(n),
            Err(_) => CampaignId::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignId::Number(n) => write!(f, "{}", n),
            CampaignId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CampaignId {
    fn from(value: i64) -> Self {
        CampaignId::Number(value)
    }
}

impl From<&str> for CampaignId {
    fn from(value: &str) -> Self {
        CampaignId::Text(value.to_string())
    }
}

/// One campaign as fetched from the repository. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: CampaignId,
    pub name: String,
    pub status: CampaignStatus,
    pub clicks: u64,
    /// Currency amount; displayed with two decimals.
    pub cost: f64,
    pub impressions: u64,
}

impl CampaignRecord {
    pub fn new(
        id: impl Into<CampaignId>,
        name: impl Into<String>,
        status: CampaignStatus,
        clicks: u64,
        cost: f64,
        impressions: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            clicks,
            cost,
            impressions,
        }
    }
}

/// Campaign draft submitted to `POST /campaigns`; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub status: CampaignStatus,
    pub clicks: u64,
    pub cost: f64,
    pub impressions: u64,
}

impl NewCampaign {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Invalid("name must not be empty".to_string()));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(Error::Invalid(format!(
                "cost must be a non-negative amount, got {}",
                self.cost
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_integer_id() {
        let json = r#"{"id":1,"name":"Summer Sale","status":"Active","clicks":150,"cost":45.99,"impressions":1000}"#;
        let record: CampaignRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, CampaignId::Number(1));
        assert_eq!(record.status, CampaignStatus::Active);
        assert_eq!(record.clicks, 150);
        assert_eq!(record.impressions, 1000);
    }

    #[test]
    fn test_record_deserializes_string_id() {
        let json = r#"{"id":"cmp-7","name":"Winter Sale","status":"Paused","clicks":175,"cost":49.99,"impressions":1350}"#;
        let record: CampaignRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, CampaignId::Text("cmp-7".to_string()));
        assert_eq!(record.id.to_string(), "cmp-7");
    }

    #[test]
    fn test_record_rejects_negative_clicks() {
        let json = r#"{"id":1,"name":"x","status":"Active","clicks":-3,"cost":1.0,"impressions":10}"#;
        assert!(serde_json::from_str::<CampaignRecord>(json).is_err());
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(CampaignId::parse("42"), CampaignId::Number(42));
        assert_eq!(CampaignId::parse(" abc "), CampaignId::Text("abc".to_string()));
    }

    #[test]
    fn test_new_campaign_validation() {
        let mut draft = NewCampaign {
            name: "Launch".to_string(),
            status: CampaignStatus::Active,
            clicks: 0,
            cost: 0.0,
            impressions: 0,
        };
        assert!(draft.validate().is_ok());

        draft.cost = -1.0;
        assert!(draft.validate().is_err());

        draft.cost = 1.0;
        draft.name = "   ".to_string();
        assert!(draft.validate().is_err());
    }
}
