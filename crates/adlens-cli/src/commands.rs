use super::args::{Cli, Commands, ConfigCommand};
use super::context::{ExecutionContext, resolve_config_path};
use super::handlers;
use super::logging;
use adlens_types::NewCampaign;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Dashboard {
            log_file: Some(path),
        }) => logging::init_file(cli.log_level, path)?,
        // the alternate screen owns the terminal
        Some(Commands::Dashboard { log_file: None }) => {}
        _ => logging::init_console(cli.log_level),
    }

    // `config init` must work even when the existing file does not parse
    if let Some(Commands::Config {
        command: ConfigCommand::Init { force },
    }) = &cli.command
    {
        let path = resolve_config_path(cli.config.as_deref())?;
        return handlers::config::init(&path, *force, cli.format);
    }

    let ctx = ExecutionContext::from_cli(&cli)?;
    let format = cli.format;

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx, format);
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::List {
            selection,
            view_mode,
        } => runtime.block_on(handlers::campaign_list::handle(
            &ctx, &selection, format, &view_mode,
        )),

        Commands::Summary { view_mode } => {
            runtime.block_on(handlers::summary::handle(&ctx, format, &view_mode))
        }

        Commands::Insights { view_mode } => {
            runtime.block_on(handlers::insights::handle(&ctx, format, &view_mode))
        }

        Commands::Show { id } => {
            runtime.block_on(handlers::campaign_show::handle(&ctx, &id, format))
        }

        Commands::Create {
            name,
            status,
            clicks,
            cost,
            impressions,
        } => {
            let draft = NewCampaign {
                name,
                status: status.into(),
                clicks,
                cost,
                impressions,
            };
            runtime.block_on(handlers::campaign_create::handle(&ctx, draft, format))
        }

        Commands::Export { selection, output } => runtime.block_on(handlers::export::handle(
            &ctx, &selection, output, format,
        )),

        Commands::Dashboard { .. } => handlers::dashboard::handle(&ctx, runtime.handle()),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, format),
            ConfigCommand::Init { force } => {
                handlers::config::init(ctx.config_path(), force, format)
            }
        },
    }
}
