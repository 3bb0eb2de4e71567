// NOTE: adlens layering
//
// types    -> campaign records, status and ordering vocabulary
// engine   -> pure filter/sort/aggregate/insights and the dashboard ViewState
// runtime  -> repositories (HTTP, file, demo), config, load orchestration
// cli      -> argument parsing, handlers, console and TUI presentation
//
// Every derived number shown to the user comes from the engine. The CLI
// never recomputes totals or orderings on its own.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
