use adlens_engine::{InsightsReport, Trend, trend};
use adlens_types::CampaignStatus;

use super::campaign::summary_view_model;
use crate::presentation::view_models::{
    BestPerformerViewModel, CommandResultViewModel, Guidance, InsightsViewModel,
    PerformanceEntryViewModel, StatusBadge, StatusShareViewModel,
};

pub(crate) fn insights_view_model(report: &InsightsReport) -> InsightsViewModel {
    let best_performer = report
        .summary
        .best_performer
        .as_ref()
        .zip(report.best_performer_ctr)
        .map(|(record, ctr)| BestPerformerViewModel {
            id: record.id.clone(),
            name: record.name.clone(),
            ctr,
        });

    let performance = report
        .performance
        .iter()
        .map(|entry| PerformanceEntryViewModel {
            id: entry.id.clone(),
            name: entry.name.clone(),
            clicks: entry.clicks,
            cost: entry.cost,
            ctr: entry.ctr,
            trend: entry.trend,
        })
        .collect();

    let status_distribution = CampaignStatus::ALL
        .into_iter()
        .map(|status| StatusShareViewModel {
            status: status.to_string(),
            count: report.status_distribution.count(status),
            share: report.status_distribution.share(status),
        })
        .collect();

    InsightsViewModel {
        summary: summary_view_model(&report.summary),
        best_performer,
        performance,
        status_distribution,
    }
}

pub fn present_insights(report: &InsightsReport) -> CommandResultViewModel<InsightsViewModel> {
    let result = CommandResultViewModel::new(insights_view_model(report));

    if report.is_empty() {
        return result
            .with_badge(StatusBadge::info("No campaigns to analyze"))
            .with_suggestion(
                Guidance::new("Try the built-in sample data")
                    .with_command("adlens --demo insights"),
            );
    }

    match &report.summary.best_performer {
        Some(best) => {
            let mut result = result.with_badge(StatusBadge::success(format!(
                "Best performer: {}",
                best.name
            )));
            if trend(best) == Trend::Down {
                result = result.with_suggestion(Guidance::new(
                    "The highest click-through rate comes from a low-volume campaign",
                ));
            }
            result
        }
        None => result.with_badge(StatusBadge::warning(
            "No campaign has impressions yet; click-through rates are unavailable",
        )),
    }
}
