use adlens_runtime::Config;
use anyhow::{Context, Result, bail};
use std::path::Path;

use super::HandlerContext;
use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn show(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let path = ctx.config_path();
    let result = presenters::present_config(
        ctx.config(),
        &path.display().to_string(),
        path.exists(),
        &ctx.source().to_string(),
    );
    HandlerContext::new(format, &ViewModeArgs::default()).render(result)
}

/// Write the default configuration to `path`.
///
/// Runs without loading the existing file, so a broken config can be
/// replaced with `--force`.
pub fn init(path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    let existed = path.exists();
    if existed && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    config
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    let content = toml::to_string_pretty(&config)?;
    tracing::info!(path = %path.display(), "config written");

    let result = presenters::present_config_init(&path.display().to_string(), existed, content);
    HandlerContext::new(format, &ViewModeArgs::default()).render(result)
}
