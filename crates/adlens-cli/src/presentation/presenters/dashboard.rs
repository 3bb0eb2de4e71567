use adlens_engine::{LoadState, ViewState};

use super::campaign::{campaign_list_view_model, summary_view_model};
use super::insights::insights_view_model;
use crate::presentation::view_models::{
    DashboardScreenViewModel, LoadPhase, LoadStatusViewModel, StatusLevel,
};

/// Build one dashboard frame from the current view state.
///
/// Summary and insights always cover the full collection; only the table
/// follows the filter.
pub fn present_dashboard(
    state: &ViewState,
    source: &str,
    loaded_at: Option<&str>,
    show_insights: bool,
) -> DashboardScreenViewModel {
    let all = state.all_records();

    let load = match state.load_state() {
        LoadState::Loading => LoadStatusViewModel {
            phase: LoadPhase::Loading,
            level: StatusLevel::Info,
            message: format!("Loading campaigns from {}...", source),
            loaded_at: None,
        },
        LoadState::Loaded(records) => LoadStatusViewModel {
            phase: LoadPhase::Loaded,
            level: StatusLevel::Success,
            message: match records.len() {
                1 => "1 campaign loaded".to_string(),
                n => format!("{} campaigns loaded", n),
            },
            loaded_at: loaded_at.map(str::to_string),
        },
        LoadState::Failed(message) => LoadStatusViewModel {
            phase: LoadPhase::Failed,
            level: StatusLevel::Error,
            message: format!("Failed to load campaigns: {}", message),
            loaded_at: None,
        },
    };

    DashboardScreenViewModel {
        source: source.to_string(),
        load,
        summary: summary_view_model(&state.summary()),
        table: campaign_list_view_model(
            state.visible_records(),
            all.len(),
            state.status_filter(),
            state.sort_key(),
            state.sort_direction(),
        ),
        insights: show_insights.then(|| insights_view_model(&state.insights())),
    }
}
