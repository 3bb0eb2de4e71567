//! Placeholder shown in the table area while loading or after a failure.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::status_level_to_color;
use crate::presentation::view_models::{LoadPhase, LoadStatusViewModel};

pub struct LoadPanelView<'a> {
    model: &'a LoadStatusViewModel,
}

impl<'a> LoadPanelView<'a> {
    pub fn new(model: &'a LoadStatusViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for LoadPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let (title, lines) = match self.model.phase {
            LoadPhase::Failed => (
                "Error",
                vec![
                    Line::from(Span::styled(
                        self.model.message.as_str(),
                        Style::default().fg(color),
                    )),
                    Line::default(),
                    Line::from(vec![
                        Span::raw("Press "),
                        Span::styled("r", Style::default().fg(Color::Yellow)),
                        Span::raw(" to reload or "),
                        Span::styled("q", Style::default().fg(Color::Yellow)),
                        Span::raw(" to quit."),
                    ]),
                ],
            ),
            LoadPhase::Loading | LoadPhase::Loaded => (
                "Loading",
                vec![Line::from(Span::styled(
                    self.model.message.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::ITALIC),
                ))],
            ),
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_failure_panel_offers_reload() {
        let model = LoadStatusViewModel {
            phase: LoadPhase::Failed,
            level: StatusLevel::Error,
            message: "Failed to load campaigns: connection refused".to_string(),
            loaded_at: None,
        };
        let area = Rect::new(0, 0, 80, 6);
        let mut buf = Buffer::empty(area);
        LoadPanelView::new(&model).render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Error"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("Press r to reload"));
    }
}
