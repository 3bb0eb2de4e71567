mod context;

pub mod campaign_create;
pub mod campaign_list;
pub mod campaign_show;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod guidance;
pub mod insights;
pub mod summary;

pub use context::HandlerContext;

use adlens_engine::ViewState;
use adlens_runtime::{CampaignController, CampaignRepository};
use anyhow::{Context, Result};

use crate::context::ExecutionContext;

/// Fetch the collection once into a controller seeded with `state`
pub(crate) async fn load_campaigns(
    ctx: &ExecutionContext,
    state: ViewState,
) -> Result<CampaignController<dyn CampaignRepository>> {
    let mut controller = CampaignController::new(ctx.repository()?, state);
    controller
        .load()
        .await
        .with_context(|| format!("Failed to load campaigns from {}", ctx.source()))?;
    Ok(controller)
}
