//! Dashboard widgets and stateful components
//!
//! 1. **Views**: stateless `Widget` implementations over a ViewModel
//! 2. **Components**: UI state (table selection, overlay flag) plus input
//!    handling; they delegate drawing to the views
//!
//! Views only map ViewModel fields to ratatui primitives. Numbers arrive
//! unformatted and go through the shared formatters, so the dashboard and
//! the console output agree on every figure.

pub mod campaign_table;
pub mod components;
pub mod insights_overlay;
pub mod load_panel;
pub mod status_bar;
pub mod summary_cards;

pub use campaign_table::CampaignTableView;
pub use components::{DashboardAction, DashboardComponent};
pub use insights_overlay::InsightsOverlayView;
pub use load_panel::LoadPanelView;
pub use status_bar::StatusBarView;
pub use summary_cards::SummaryCardsView;

use crate::presentation::view_models::StatusLevel;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn status_color(status: &str) -> Color {
    match status {
        "Active" => Color::Green,
        "Paused" => Color::Yellow,
        _ => Color::Reset,
    }
}

/// Area of `percent_x` x `percent_y` centered in `area`
pub(crate) fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
