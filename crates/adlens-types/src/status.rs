use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Lifecycle status of a campaign as reported by the backend.
///
/// Wire form is the exact strings `"Active"` and `"Paused"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Paused,
}

impl CampaignStatus {
    /// All statuses in display order (used for distributions and legends).
    pub const ALL: [CampaignStatus; 2] = [CampaignStatus::Active, CampaignStatus::Paused];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(CampaignStatus::Active),
            "paused" => Ok(CampaignStatus::Paused),
            _ => Err(Error::UnknownValue {
                kind: "campaign status",
                value: s.to_string(),
            }),
        }
    }
}

/// Status predicate restricting the visible record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Paused,
}

impl StatusFilter {
    /// Whether a record with `status` passes this filter.
    pub fn matches(&self, status: CampaignStatus) -> bool {
        match self.status() {
            None => true,
            Some(wanted) => wanted == status,
        }
    }

    /// The single status this filter selects, or `None` for `All`.
    pub fn status(&self) -> Option<CampaignStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(CampaignStatus::Active),
            StatusFilter::Paused => Some(CampaignStatus::Paused),
        }
    }

    /// Next filter in the All -> Active -> Paused -> All cycle.
    pub fn next(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Paused,
            StatusFilter::Paused => StatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Paused => "paused",
        }
    }

    /// Human label shown next to the filter control.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Campaigns",
            StatusFilter::Active => "Active Only",
            StatusFilter::Paused => "Paused Only",
        }
    }
}

impl From<CampaignStatus> for StatusFilter {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Active => StatusFilter::Active,
            CampaignStatus::Paused => StatusFilter::Paused,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "paused" => Ok(StatusFilter::Paused),
            _ => Err(Error::UnknownValue {
                kind: "status filter",
                value: s.to_string(),
            }),
        }
    }
}
