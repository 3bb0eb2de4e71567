//! Three totals cards across the top of the dashboard.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::number::{format_currency, format_thousands};
use crate::presentation::view_models::SummaryViewModel;

pub struct SummaryCardsView<'a> {
    model: &'a SummaryViewModel,
}

impl<'a> SummaryCardsView<'a> {
    pub fn new(model: &'a SummaryViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SummaryCardsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = [
            ("Total Clicks", format_thousands(self.model.total_clicks)),
            ("Total Cost", format_currency(self.model.total_cost)),
            (
                "Total Impressions",
                format_thousands(self.model.total_impressions),
            ),
        ];

        let chunks = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for ((title, value), chunk) in cards.into_iter().zip(chunks.iter()) {
            let block = Block::default().title(title).borders(Borders::ALL);
            Paragraph::new(Line::from(value))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block)
                .render(*chunk, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_cards_show_totals() {
        let model = SummaryViewModel {
            campaign_count: 2,
            total_clicks: 470,
            total_cost: 135.49,
            total_impressions: 3500,
            ctr: Some(13.43),
            cpc: Some(0.29),
        };
        let area = Rect::new(0, 0, 90, 3);
        let mut buf = Buffer::empty(area);
        SummaryCardsView::new(&model).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Total Clicks"));
        assert!(text.contains("470"));
        assert!(text.contains("$135.49"));
        assert!(text.contains("3,500"));
    }
}
