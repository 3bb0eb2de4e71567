use adlens_types::NewCampaign;
use anyhow::Result;

use super::HandlerContext;
use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub async fn handle(
    ctx: &ExecutionContext,
    draft: NewCampaign,
    format: OutputFormat,
) -> Result<()> {
    let repository = ctx.repository()?;
    let created = repository.create(&draft).await?;

    let result = presenters::present_campaign_created(&created, &repository.describe());
    HandlerContext::new(format, &ViewModeArgs::default()).render(result)
}
