//! Dashboard component (page-level)
//!
//! Owns the table component and the insights overlay flag. Keys that
//! change the campaign state are returned as actions for the renderer to
//! apply to the controller.

use adlens_types::SortKey;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::campaign_table::CampaignTableComponent;
use crate::presentation::view_models::{DashboardScreenViewModel, LoadPhase};
use crate::presentation::views::tui::{
    InsightsOverlayView, LoadPanelView, StatusBarView, SummaryCardsView,
};

/// Actions that Dashboard emits to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
    CycleStatusFilter,
    SortBy(SortKey),
    Reload,
}

pub struct DashboardComponent {
    table: CampaignTableComponent,
    show_insights: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            table: CampaignTableComponent::new(),
            show_insights: false,
        }
    }

    pub fn show_insights(&self) -> bool {
        self.show_insights
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        screen: &DashboardScreenViewModel,
    ) -> Option<DashboardAction> {
        match key.code {
            KeyCode::Esc if self.show_insights => {
                self.show_insights = false;
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(DashboardAction::Quit),
            KeyCode::Char('i') => {
                self.show_insights = !self.show_insights;
                None
            }
            KeyCode::Char('r') => {
                self.table.reset();
                Some(DashboardAction::Reload)
            }
            KeyCode::Char('f') => {
                self.table.reset();
                Some(DashboardAction::CycleStatusFilter)
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.table.reset();
                Some(DashboardAction::SortBy(SortKey::ALL[index]))
            }
            _ if self.show_insights => None,
            _ => {
                self.table
                    .handle_input(key, screen.table.campaigns.len());
                None
            }
        }
    }

    /// Layout: [summary cards | table or load panel | status bar], with
    /// the insights overlay drawn on top when open
    pub fn render(&mut self, f: &mut Frame, size: Rect, screen: &DashboardScreenViewModel) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(size);

        f.render_widget(SummaryCardsView::new(&screen.summary), chunks[0]);

        match screen.load.phase {
            LoadPhase::Loaded => self.table.render(f, chunks[1], &screen.table),
            LoadPhase::Loading | LoadPhase::Failed => {
                f.render_widget(LoadPanelView::new(&screen.load), chunks[1])
            }
        }

        f.render_widget(StatusBarView::new(&screen.load, &screen.source), chunks[2]);

        if let Some(insights) = &screen.insights {
            f.render_widget(InsightsOverlayView::new(insights), size);
        }
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
