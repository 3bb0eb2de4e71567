//! # Presentation Layer
//!
//! MVVM-style split between campaign logic (`adlens_engine`) and output.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!                                                                   (Console/JSON/TUI)
//! ```
//!
//! ## Directory Guide
//!
//! ### 1. `view_models/` (The Data Contract)
//! * Pure data containers that implement `Serialize`. No calculation logic.
//! * Numbers stay raw so `--format json` is machine-readable.
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * Functions that convert engine results into ViewModels and decide
//!   badges and follow-up suggestions.
//!
//! ### 3. `views/` (The Layout)
//! * `CreateView` implementations for console text, one per ViewModel.
//! * `views/tui/`: ratatui widgets and stateful dashboard components.
//!
//! ### 4. `renderers/` (The Output Strategy)
//! * `console.rs`: badge, content and tips to stdout, or pretty JSON.
//! * `tui.rs`: the dashboard event loop.
//!
//! ### 5. `formatters/` (The Utilities)
//! * Currency, percent and thousands formatting shared by text and TUI.
//!
//! ## Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a new field to the JSON output | **`view_models/`** |
//! | Pick a badge or a tip | **`presenters/`** |
//! | Change a column width | **`views/`** |
//! | Change the color of a warning | **`renderers/`** or **`views/tui/`** |
//! | Format money as "$1,234.50" | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode,
};
