use adlens_engine::ViewState;
use anyhow::Result;

use super::{HandlerContext, load_campaigns};
use crate::args::{OutputFormat, SelectionArgs, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub async fn handle(
    ctx: &ExecutionContext,
    selection: &SelectionArgs,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let (status_filter, sort_key, sort_direction) = selection.resolve(ctx.view_defaults());
    let controller = load_campaigns(
        ctx,
        ViewState::with_selection(status_filter, sort_key, sort_direction),
    )
    .await?;

    let state = controller.state();
    let result = presenters::present_campaign_list(
        state.visible_records(),
        state.all_records().len(),
        state.status_filter(),
        state.sort_key(),
        state.sort_direction(),
    );

    HandlerContext::new(format, view_mode).render(result)
}
