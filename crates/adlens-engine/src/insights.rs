// Insights - chart series, status distribution and trend signals
// Everything here is derived from the full record collection

use adlens_types::{CampaignId, CampaignRecord, CampaignStatus};
use serde::Serialize;
use std::borrow::Borrow;

use crate::aggregate::{AggregateResult, aggregate, click_through_rate};

/// Clicks above which a campaign is shown as trending up
pub const TREND_CLICK_THRESHOLD: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn trend(record: &CampaignRecord) -> Trend {
    if record.clicks > TREND_CLICK_THRESHOLD {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// One point of the per-campaign performance chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPerformance {
    pub id: CampaignId,
    pub name: String,
    pub clicks: u64,
    pub cost: f64,
    /// Click-through rate in percent, rounded to two decimals
    pub ctr: Option<f64>,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: CampaignStatus,
    pub count: usize,
}

/// Record count per status, always listing every status (zero counts included)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDistribution {
    pub entries: Vec<StatusCount>,
    pub total: usize,
}

impl StatusDistribution {
    pub fn count(&self, status: CampaignStatus) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.status == status)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Fraction of records with `status`, `None` for an empty collection.
    pub fn share(&self, status: CampaignStatus) -> Option<f64> {
        (self.total > 0).then(|| self.count(status) as f64 / self.total as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub summary: AggregateResult,
    /// Click-through rate of `summary.best_performer`, in percent
    pub best_performer_ctr: Option<f64>,
    pub performance: Vec<CampaignPerformance>,
    pub status_distribution: StatusDistribution,
}

impl InsightsReport {
    pub fn is_empty(&self) -> bool {
        self.summary.campaign_count == 0
    }
}

pub fn status_distribution<R>(records: &[R]) -> StatusDistribution
where
    R: Borrow<CampaignRecord>,
{
    let entries = CampaignStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: records
                .iter()
                .filter(|record| (*record).borrow().status == status)
                .count(),
        })
        .collect();

    StatusDistribution {
        entries,
        total: records.len(),
    }
}

pub fn build_insights<R>(records: &[R]) -> InsightsReport
where
    R: Borrow<CampaignRecord>,
{
    let summary = aggregate(records);
    let best_performer_ctr = summary.best_performer.as_ref().and_then(click_through_rate);

    let performance = records
        .iter()
        .map(|record| {
            let record = record.borrow();
            CampaignPerformance {
                id: record.id.clone(),
                name: record.name.clone(),
                clicks: record.clicks,
                cost: record.cost,
                ctr: click_through_rate(record).map(round2),
                trend: trend(record),
            }
        })
        .collect();

    InsightsReport {
        summary,
        best_performer_ctr,
        performance,
        status_distribution: status_distribution(records),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlens_types::CampaignStatus::{Active, Paused};

    fn records() -> Vec<CampaignRecord> {
        vec![
            CampaignRecord::new(1, "Summer Sale", Active, 150, 45.99, 1000),
            CampaignRecord::new(2, "Black Friday", Paused, 320, 89.50, 2500),
            CampaignRecord::new(3, "Holiday Special", Active, 215, 62.25, 1750),
            CampaignRecord::new(4, "Unserved", Active, 0, 0.0, 0),
        ]
    }

    #[test]
    fn test_performance_series_rounds_ctr() {
        let report = build_insights(&records());

        let ctrs: Vec<Option<f64>> = report.performance.iter().map(|p| p.ctr).collect();
        assert_eq!(ctrs, vec![Some(15.0), Some(12.8), Some(12.29), None]);
        assert_eq!(report.performance[1].name, "Black Friday");
    }

    #[test]
    fn test_best_performer_and_rate() {
        let report = build_insights(&records());

        let best = report.summary.best_performer.as_ref().unwrap();
        assert_eq!(best.name, "Summer Sale");
        assert_eq!(report.best_performer_ctr, Some(15.0));
    }

    #[test]
    fn test_status_distribution_lists_every_status() {
        let dist = status_distribution(&records());
        assert_eq!(dist.count(Active), 3);
        assert_eq!(dist.count(Paused), 1);
        assert_eq!(dist.total, 4);
        assert_eq!(dist.share(Paused), Some(0.25));

        let only_active = vec![CampaignRecord::new(1, "A", Active, 1, 1.0, 10)];
        let dist = status_distribution(&only_active);
        assert_eq!(dist.entries.len(), 2);
        assert_eq!(dist.count(Paused), 0);
    }

    #[test]
    fn test_empty_report() {
        let report = build_insights::<CampaignRecord>(&[]);
        assert!(report.is_empty());
        assert_eq!(report.best_performer_ctr, None);
        assert!(report.performance.is_empty());
        assert_eq!(report.status_distribution.share(Active), None);
    }

    #[test]
    fn test_trend_threshold() {
        let at = CampaignRecord::new(1, "A", Active, TREND_CLICK_THRESHOLD, 1.0, 1000);
        let above = CampaignRecord::new(2, "B", Active, TREND_CLICK_THRESHOLD + 1, 1.0, 1000);
        assert_eq!(trend(&at), Trend::Down);
        assert_eq!(trend(&above), Trend::Up);
    }

    #[test]
    fn test_performance_carries_trend() {
        let report = build_insights(&records());
        let trends: Vec<Trend> = report.performance.iter().map(|p| p.trend).collect();
        assert_eq!(trends, vec![Trend::Down, Trend::Up, Trend::Up, Trend::Down]);
        assert_eq!(Trend::Up.to_string(), "up");
    }
}
