//! Campaign table view. Rendered statefully by `CampaignTableComponent`.

use adlens_engine::Trend;
use adlens_types::{SortDirection, SortKey};
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::status_color;
use crate::presentation::formatters::number::{
    MISSING_RATIO, format_currency, format_optional_percent, format_thousands,
};
use crate::presentation::view_models::CampaignListViewModel;

const TREND_UP: &str = "▲";
const TREND_DOWN: &str = "▼";

pub struct CampaignTableView<'a> {
    model: &'a CampaignListViewModel,
}

impl<'a> CampaignTableView<'a> {
    pub fn new(model: &'a CampaignListViewModel) -> Self {
        Self { model }
    }

    /// Build the Table widget for stateful rendering
    pub fn build_table(self) -> Table<'static> {
        let title = format!(
            "Campaigns ({}/{}) | status: {}",
            self.model.campaigns.len(),
            self.model.total_count,
            self.model.status_filter
        );
        let block = Block::default().title(title).borders(Borders::ALL);

        let header = Row::new(
            std::iter::once(Cell::from("ID"))
                .chain(SortKey::ALL.iter().enumerate().map(|(i, key)| {
                    Cell::from(self.header_label(i + 1, *key))
                }))
                .chain([Cell::from("CTR"), Cell::from("Trend")]),
        )
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let rows: Vec<Row<'static>> = self
            .model
            .campaigns
            .iter()
            .map(|row| {
                let trend = match row.trend {
                    Trend::Up => Span::styled(TREND_UP, Style::default().fg(Color::Green)),
                    Trend::Down => Span::styled(TREND_DOWN, Style::default().fg(Color::Red)),
                };

                Row::new(vec![
                    Cell::from(row.id.to_string()),
                    Cell::from(row.name.clone()),
                    Cell::from(Span::styled(
                        row.status.clone(),
                        Style::default().fg(status_color(&row.status)),
                    )),
                    Cell::from(Line::from(format_thousands(row.clicks)).right_aligned()),
                    Cell::from(Line::from(format_currency(row.cost)).right_aligned()),
                    Cell::from(Line::from(format_thousands(row.impressions)).right_aligned()),
                    Cell::from(
                        Line::from(format_optional_percent(row.ctr, MISSING_RATIO))
                            .right_aligned(),
                    ),
                    Cell::from(Line::from(trend).centered()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(17),
            Constraint::Length(8),
            Constraint::Length(7),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ")
    }

    /// Header text with its sort hotkey, plus an arrow on the sorted column
    fn header_label(&self, hotkey: usize, key: SortKey) -> String {
        if key.as_str() != self.model.sort_key {
            return format!("{} [{}]", key.label(), hotkey);
        }
        let arrow = if self.model.sort_direction == SortDirection::Descending.as_str() {
            SortDirection::Descending.arrow()
        } else {
            SortDirection::Ascending.arrow()
        };
        format!("{} {} [{}]", key.label(), arrow, hotkey)
    }
}
