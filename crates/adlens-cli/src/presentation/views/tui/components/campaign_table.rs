//! Campaign table component
//!
//! Encapsulates table selection and scroll keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::TableState};

use crate::presentation::view_models::CampaignListViewModel;
use crate::presentation::views::tui::CampaignTableView;

const PAGE_SIZE: usize = 10;

pub struct CampaignTableComponent {
    state: TableState,
}

impl CampaignTableComponent {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Handle a navigation key. Returns false when the key is not a
    /// table key, so the page can interpret it.
    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(data_len),
            KeyCode::Char('k') | KeyCode::Up => self.previous(),
            KeyCode::PageDown => self.page_down(data_len),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(data_len),
            _ => return false,
        }
        true
    }

    /// Back to the first row after the visible set changes
    pub fn reset(&mut self) {
        self.state = TableState::default();
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &CampaignListViewModel) {
        self.clamp(data.campaigns.len());
        let table = CampaignTableView::new(data).build_table();
        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn clamp(&mut self, data_len: usize) {
        match self.state.selected() {
            _ if data_len == 0 => self.state.select(None),
            Some(selected) if selected >= data_len => self.state.select(Some(data_len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) if i + 1 < data_len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn page_down(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => (i + PAGE_SIZE).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn page_up(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(PAGE_SIZE),
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn scroll_to_top(&mut self) {
        self.state.select(Some(0));
    }

    fn scroll_to_bottom(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(data_len - 1));
        }
    }
}

impl Default for CampaignTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(component: &mut CampaignTableComponent, code: KeyCode, len: usize) -> bool {
        component.handle_input(KeyEvent::new(code, KeyModifiers::NONE), len)
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut table = CampaignTableComponent::new();
        press(&mut table, KeyCode::Down, 3);
        assert_eq!(table.selected(), Some(0));
        press(&mut table, KeyCode::Char('j'), 3);
        press(&mut table, KeyCode::Char('j'), 3);
        press(&mut table, KeyCode::Char('j'), 3);
        assert_eq!(table.selected(), Some(2));
        press(&mut table, KeyCode::Up, 3);
        assert_eq!(table.selected(), Some(1));
        press(&mut table, KeyCode::PageUp, 3);
        assert_eq!(table.selected(), Some(0));
        press(&mut table, KeyCode::End, 3);
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn test_page_down_clamps() {
        let mut table = CampaignTableComponent::new();
        press(&mut table, KeyCode::Home, 25);
        press(&mut table, KeyCode::PageDown, 25);
        assert_eq!(table.selected(), Some(10));
        press(&mut table, KeyCode::PageDown, 25);
        press(&mut table, KeyCode::PageDown, 25);
        assert_eq!(table.selected(), Some(24));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut table = CampaignTableComponent::new();
        press(&mut table, KeyCode::End, 10);
        table.clamp(4);
        assert_eq!(table.selected(), Some(3));
        table.clamp(0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut table = CampaignTableComponent::new();
        assert!(!press(&mut table, KeyCode::Char('f'), 3));
        assert_eq!(table.selected(), None);
    }
}
