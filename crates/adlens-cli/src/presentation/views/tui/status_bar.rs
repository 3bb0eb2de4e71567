//! Bottom status bar: load state on the left, key help on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::LoadStatusViewModel;

const KEY_HELP: [(&str, &str); 5] = [
    ("[q]", "uit "),
    ("[f]", "ilter "),
    ("[1-5]", "sort "),
    ("[i]", "nsights "),
    ("[r]", "eload"),
];

pub struct StatusBarView<'a> {
    model: &'a LoadStatusViewModel,
    source: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a LoadStatusViewModel, source: &'a str) -> Self {
        Self { model, source }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);
        let dim = Style::default().add_modifier(Modifier::DIM);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let mut status = vec![
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
            Span::styled(" | ", dim),
            Span::styled(self.source, dim),
        ];
        if let Some(loaded_at) = &self.model.loaded_at {
            status.push(Span::styled(format!(" | at {}", loaded_at), dim));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let help: Vec<Span> = KEY_HELP
            .iter()
            .flat_map(|(key, rest)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::raw(*rest),
                ]
            })
            .collect();
        Paragraph::new(Line::from(help).right_aligned()).render(chunks[1], buf);
    }
}
