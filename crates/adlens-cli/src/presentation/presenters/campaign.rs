use adlens_engine::{AggregateResult, click_through_rate, cost_per_click, trend};
use adlens_types::{CampaignRecord, SortDirection, SortKey, StatusFilter};
use std::borrow::Borrow;

use crate::presentation::view_models::{
    CampaignCreatedViewModel, CampaignDetailViewModel, CampaignListViewModel,
    CampaignRowViewModel, CommandResultViewModel, ExportViewModel, Guidance, StatusBadge,
    SummaryViewModel,
};

pub(crate) fn campaign_row(record: &CampaignRecord) -> CampaignRowViewModel {
    CampaignRowViewModel {
        id: record.id.clone(),
        name: record.name.clone(),
        status: record.status.to_string(),
        clicks: record.clicks,
        cost: record.cost,
        impressions: record.impressions,
        ctr: click_through_rate(record),
        cpc: cost_per_click(record),
        trend: trend(record),
    }
}

pub(crate) fn campaign_list_view_model<R>(
    visible: &[R],
    total_count: usize,
    status_filter: StatusFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
) -> CampaignListViewModel
where
    R: Borrow<CampaignRecord>,
{
    CampaignListViewModel {
        campaigns: visible.iter().map(|r| campaign_row(r.borrow())).collect(),
        total_count,
        status_filter: status_filter.as_str().to_string(),
        sort_key: sort_key.as_str().to_string(),
        sort_direction: sort_direction.as_str().to_string(),
    }
}

pub fn present_campaign_list<R>(
    visible: &[R],
    total_count: usize,
    status_filter: StatusFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
) -> CommandResultViewModel<CampaignListViewModel>
where
    R: Borrow<CampaignRecord>,
{
    let content =
        campaign_list_view_model(visible, total_count, status_filter, sort_key, sort_direction);
    let shown = content.campaigns.len();
    let mut result = CommandResultViewModel::new(content);

    if total_count == 0 {
        result = result
            .with_badge(StatusBadge::info("No campaigns"))
            .with_suggestion(
                Guidance::new("Try the built-in sample data").with_command("adlens --demo list"),
            );
    } else if shown == 0 {
        result = result
            .with_badge(StatusBadge::info(format!(
                "No campaigns match {}",
                status_filter.label()
            )))
            .with_suggestion(
                Guidance::new("Show every campaign").with_command("adlens list --status all"),
            );
    } else {
        let label = if shown == total_count {
            pluralize(shown, "campaign")
        } else {
            format!("{} of {}", pluralize(shown, "campaign"), total_count)
        };
        result = result.with_badge(StatusBadge::success(label));
    }

    result
}

pub(crate) fn summary_view_model(summary: &AggregateResult) -> SummaryViewModel {
    SummaryViewModel {
        campaign_count: summary.campaign_count,
        total_clicks: summary.total_clicks,
        total_cost: summary.total_cost,
        total_impressions: summary.total_impressions,
        ctr: summary.ctr,
        cpc: summary.cpc,
    }
}

pub fn present_summary(summary: &AggregateResult) -> CommandResultViewModel<SummaryViewModel> {
    let result = CommandResultViewModel::new(summary_view_model(summary));
    if summary.campaign_count == 0 {
        result
            .with_badge(StatusBadge::info("No campaigns"))
            .with_suggestion(
                Guidance::new("Try the built-in sample data")
                    .with_command("adlens --demo summary"),
            )
    } else {
        result
    }
}

pub fn present_campaign_detail(
    record: &CampaignRecord,
) -> CommandResultViewModel<CampaignDetailViewModel> {
    CommandResultViewModel::new(CampaignDetailViewModel {
        campaign: campaign_row(record),
    })
}

pub fn present_campaign_created(
    record: &CampaignRecord,
    endpoint: &str,
) -> CommandResultViewModel<CampaignCreatedViewModel> {
    CommandResultViewModel::new(CampaignCreatedViewModel {
        campaign: campaign_row(record),
        endpoint: endpoint.to_string(),
    })
    .with_badge(StatusBadge::success(format!(
        "Created campaign {}",
        record.id
    )))
    .with_suggestion(
        Guidance::new("View it").with_command(format!("adlens show {}", record.id)),
    )
}

pub fn present_export(
    exported_count: usize,
    output_path: &str,
) -> CommandResultViewModel<ExportViewModel> {
    CommandResultViewModel::new(ExportViewModel {
        exported_count,
        output_path: output_path.to_string(),
    })
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlens_engine::Trend;
    use adlens_types::CampaignStatus::{Active, Paused};

    fn records() -> Vec<CampaignRecord> {
        vec![
            CampaignRecord::new(1, "Summer Sale", Active, 150, 45.99, 1000),
            CampaignRecord::new(2, "Black Friday", Paused, 320, 89.5, 2500),
        ]
    }

    #[test]
    fn test_list_badge_counts_filtered_rows() {
        let all = records();
        let visible = vec![all[0].clone()];
        let result = present_campaign_list(
            &visible,
            all.len(),
            StatusFilter::Active,
            SortKey::Name,
            SortDirection::Ascending,
        );
        assert_eq!(result.badge.unwrap().label, "1 campaign of 2");
        assert_eq!(result.content.status_filter, "active");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_empty_collection_suggests_demo() {
        let empty: Vec<CampaignRecord> = Vec::new();
        let result = present_campaign_list(
            &empty,
            0,
            StatusFilter::All,
            SortKey::Name,
            SortDirection::Ascending,
        );
        assert_eq!(result.badge.unwrap().label, "No campaigns");
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("adlens --demo list")
        );
    }

    #[test]
    fn test_row_keeps_raw_numbers() {
        let row = campaign_row(&records()[1]);
        assert_eq!(row.status, "Paused");
        assert_eq!(row.ctr, Some(12.8));
        assert_eq!(row.trend, Trend::Up);
    }

    #[test]
    fn test_detail_cpc_absent_without_clicks() {
        let record = CampaignRecord::new(3, "Quiet", Active, 0, 10.0, 0);
        let result = present_campaign_detail(&record);
        assert_eq!(result.content.campaign.cpc, None);
        assert_eq!(result.content.campaign.ctr, None);
    }
}
