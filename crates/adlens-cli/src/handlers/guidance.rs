use anyhow::Result;

use super::HandlerContext;
use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let path = ctx.config_path();
    let result = presenters::present_guidance(
        &ctx.source().to_string(),
        &path.display().to_string(),
        path.exists(),
    );
    HandlerContext::new(format, &ViewModeArgs::default()).render(result)
}
