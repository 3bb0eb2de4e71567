use adlens_engine::ViewState;
use anyhow::Result;

use super::{HandlerContext, load_campaigns};
use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub async fn handle(
    ctx: &ExecutionContext,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let controller = load_campaigns(ctx, ViewState::new()).await?;
    let result = presenters::present_summary(&controller.state().summary());
    HandlerContext::new(format, view_mode).render(result)
}
