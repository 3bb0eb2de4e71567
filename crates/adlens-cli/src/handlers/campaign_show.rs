use adlens_types::CampaignId;
use anyhow::Result;

use super::HandlerContext;
use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub async fn handle(ctx: &ExecutionContext, id: &str, format: OutputFormat) -> Result<()> {
    let id = CampaignId::parse(id);
    let repository = ctx.repository()?;
    let record = repository.get(&id).await?;

    let result = presenters::present_campaign_detail(&record);
    HandlerContext::new(format, &ViewModeArgs::default()).render(result)
}
