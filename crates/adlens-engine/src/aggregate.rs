use adlens_types::CampaignRecord;
use serde::Serialize;
use std::borrow::Borrow;

/// Totals and derived ratios over a set of campaigns.
///
/// Ratios are `None` when their denominator is zero; callers render a
/// neutral placeholder instead of NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub campaign_count: usize,
    pub total_clicks: u64,
    pub total_cost: f64,
    pub total_impressions: u64,
    /// Overall click-through rate in percent
    pub ctr: Option<f64>,
    /// Average cost per click
    pub cpc: Option<f64>,
    pub best_performer: Option<CampaignRecord>,
}

pub fn aggregate<R>(records: &[R]) -> AggregateResult
where
    R: Borrow<CampaignRecord>,
{
    let mut total_clicks = 0u64;
    let mut total_cost = 0.0f64;
    let mut total_impressions = 0u64;

    for record in records {
        let record = record.borrow();
        total_clicks = total_clicks.saturating_add(record.clicks);
        total_cost += record.cost;
        total_impressions = total_impressions.saturating_add(record.impressions);
    }

    if total_clicks == u64::MAX || total_impressions == u64::MAX {
        tracing::warn!(
            records = records.len(),
            "campaign totals exceed the counter range, clamped to u64::MAX"
        );
    }

    let ctr = (total_impressions > 0)
        .then(|| total_clicks as f64 * 100.0 / total_impressions as f64);
    let cpc = (total_clicks > 0).then(|| total_cost / total_clicks as f64);

    AggregateResult {
        campaign_count: records.len(),
        total_clicks,
        total_cost,
        total_impressions,
        ctr,
        cpc,
        best_performer: best_performer(records).map(|r| r.borrow().clone()),
    }
}

/// Per-record click-through rate in percent; `None` without impressions.
pub fn click_through_rate(record: &CampaignRecord) -> Option<f64> {
    (record.impressions > 0).then(|| record.clicks as f64 * 100.0 / record.impressions as f64)
}

/// Per-record cost per click; `None` without clicks.
pub fn cost_per_click(record: &CampaignRecord) -> Option<f64> {
    (record.clicks > 0).then(|| record.cost / record.clicks as f64)
}

/// Record with the highest click-through rate.
///
/// Ties go to the earliest record. Records without impressions have no rate
/// and never win.
pub fn best_performer<R>(records: &[R]) -> Option<&R>
where
    R: Borrow<CampaignRecord>,
{
    let mut best: Option<(&R, f64)> = None;

    for record in records {
        let Some(rate) = click_through_rate(record.borrow()) else {
            continue;
        };
        match best {
            Some((_, best_rate)) if rate <= best_rate => {}
            _ => best = Some((record, rate)),
        }
    }

    best.map(|(record, _)| record)
}
