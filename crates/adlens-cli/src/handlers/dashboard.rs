use adlens_engine::ViewState;
use adlens_runtime::CampaignController;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tokio::runtime::Handle;

use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;

pub fn handle(ctx: &ExecutionContext, runtime: &Handle) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the dashboard needs an interactive terminal; try `adlens list` instead");
    }

    let defaults = ctx.view_defaults();
    let mut controller = CampaignController::new(
        ctx.repository()?,
        ViewState::with_selection(
            defaults.status_filter,
            defaults.sort_key,
            defaults.sort_direction,
        ),
    );

    tracing::info!(source = %ctx.source(), "dashboard started");
    TuiRenderer::new(ctx.source().to_string()).run(&mut controller, runtime)?;
    tracing::info!("dashboard closed");
    Ok(())
}
