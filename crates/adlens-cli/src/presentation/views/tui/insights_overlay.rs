//! Insights popup: overview figures, clicks per campaign, status mix.

use adlens_engine::Trend;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Gauge, Paragraph, Widget},
};

use super::{centered, status_color};
use crate::presentation::formatters::number::{
    NOT_AVAILABLE, format_currency, format_optional_currency, format_optional_percent,
    format_percent, format_thousands,
};
use crate::presentation::formatters::text::truncate;
use crate::presentation::view_models::InsightsViewModel;

const BAR_LABEL_WIDTH: usize = 10;

pub struct InsightsOverlayView<'a> {
    model: &'a InsightsViewModel,
}

impl<'a> InsightsOverlayView<'a> {
    pub fn new(model: &'a InsightsViewModel) -> Self {
        Self { model }
    }

    fn overview_lines(&self) -> Vec<Line<'a>> {
        let model = self.model;
        let summary = &model.summary;
        let dim = Style::default().add_modifier(Modifier::DIM);

        let best = match &model.best_performer {
            Some(best) => Line::from(vec![
                Span::styled("Best performer  ", dim),
                Span::styled(
                    best.name.as_str(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" ({} CTR)", format_percent(best.ctr))),
            ]),
            None => Line::from(vec![
                Span::styled("Best performer  ", dim),
                Span::raw(NOT_AVAILABLE),
            ]),
        };

        vec![
            Line::from(vec![
                Span::styled("Total Clicks    ", dim),
                Span::raw(format_thousands(summary.total_clicks)),
                Span::styled("    Total Cost   ", dim),
                Span::raw(format_currency(summary.total_cost)),
            ]),
            Line::from(vec![
                Span::styled("Overall CTR     ", dim),
                Span::raw(format_optional_percent(summary.ctr, NOT_AVAILABLE)),
                Span::styled("    Average CPC  ", dim),
                Span::raw(format_optional_currency(summary.cpc, NOT_AVAILABLE)),
            ]),
            best,
        ]
    }

    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .model
            .performance
            .iter()
            .map(|entry| {
                let color = match entry.trend {
                    Trend::Up => Color::Green,
                    Trend::Down => Color::Blue,
                };
                Bar::default()
                    .value(entry.clicks)
                    .label(Line::from(truncate(&entry.name, BAR_LABEL_WIDTH)))
                    .text_value(format_thousands(entry.clicks))
                    .style(Style::default().fg(color))
            })
            .collect();

        BarChart::default()
            .block(
                Block::default()
                    .title("Clicks per campaign")
                    .borders(Borders::ALL),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(BAR_LABEL_WIDTH as u16)
            .bar_gap(1)
            .render(area, buf);
    }

    fn render_distribution(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Status distribution")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical(
            self.model
                .status_distribution
                .iter()
                .map(|_| Constraint::Length(1)),
        )
        .split(inner);

        for (share, row) in self.model.status_distribution.iter().zip(rows.iter()) {
            let ratio = share.share.unwrap_or(0.0).clamp(0.0, 1.0);
            Gauge::default()
                .ratio(ratio)
                .label(format!(
                    "{} {} ({:.0}%)",
                    share.status,
                    share.count,
                    ratio * 100.0
                ))
                .gauge_style(Style::default().fg(status_color(&share.status)))
                .render(*row, buf);
        }
    }
}

impl<'a> Widget for InsightsOverlayView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 80, 80);
        Clear.render(popup, buf);

        let block = Block::default()
            .title("Campaign Insights  [i/Esc] close")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup);
        block.render(popup, buf);

        if self.model.performance.is_empty() {
            Paragraph::new("No campaigns to analyze.").render(inner, buf);
            return;
        }

        let distribution_height = self.model.status_distribution.len() as u16 + 2;
        let chunks = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(distribution_height),
        ])
        .split(inner);

        Paragraph::new(self.overview_lines()).render(chunks[0], buf);
        self.render_chart(chunks[1], buf);
        self.render_distribution(chunks[2], buf);
    }
}
