use adlens_engine::Trend;
use std::fmt;

use crate::presentation::formatters::number::{
    MISSING_RATIO, NOT_AVAILABLE, format_currency, format_optional_currency,
    format_optional_percent, format_percent, format_thousands,
};
use crate::presentation::formatters::text;
use crate::presentation::view_models::{CreateView, InsightsViewModel, ViewMode};

const SHARE_BAR_WIDTH: usize = 20;

impl CreateView for InsightsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(InsightsView { data: self, mode })
    }
}

struct InsightsView<'a> {
    data: &'a InsightsViewModel,
    mode: ViewMode,
}

impl<'a> InsightsView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.best_performer {
            Some(best) => writeln!(f, "{}", best.id),
            None => Ok(()),
        }
    }

    fn render_overview(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        writeln!(f, "Overview")?;
        writeln!(
            f,
            "  {:<16}{:>12}",
            "Total Clicks",
            format_thousands(summary.total_clicks)
        )?;
        writeln!(
            f,
            "  {:<16}{:>12}",
            "Total Cost",
            format_currency(summary.total_cost)
        )?;
        if self.mode == ViewMode::Verbose {
            writeln!(
                f,
                "  {:<16}{:>12}",
                "Impressions",
                format_thousands(summary.total_impressions)
            )?;
        }
        writeln!(
            f,
            "  {:<16}{:>12}",
            "Overall CTR",
            format_optional_percent(summary.ctr, NOT_AVAILABLE)
        )?;
        writeln!(
            f,
            "  {:<16}{:>12}",
            "Average CPC",
            format_optional_currency(summary.cpc, NOT_AVAILABLE)
        )?;

        writeln!(f)?;
        match &self.data.best_performer {
            Some(best) => writeln!(
                f,
                "Best performer: {} ({} CTR)",
                best.name,
                format_percent(best.ctr)
            ),
            None => writeln!(f, "Best performer: {}", NOT_AVAILABLE),
        }
    }

    fn render_performance(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name_width = text::column_width(
            self.data.performance.iter().map(|entry| entry.name.as_str()),
            4,
            28,
        );

        writeln!(f, "Campaign performance")?;
        writeln!(
            f,
            "  {:<nw$}  {:>8}  {:>10}  {:>7}  TREND",
            "NAME",
            "CLICKS",
            "COST",
            "CTR",
            nw = name_width
        )?;
        for entry in &self.data.performance {
            let arrow = match entry.trend {
                Trend::Up => "↑",
                Trend::Down => "↓",
            };
            writeln!(
                f,
                "  {:<nw$}  {:>8}  {:>10}  {:>7}  {}",
                text::truncate(&entry.name, name_width),
                format_thousands(entry.clicks),
                format_currency(entry.cost),
                format_optional_percent(entry.ctr, MISSING_RATIO),
                arrow,
                nw = name_width
            )?;
        }
        Ok(())
    }

    fn render_distribution(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Status distribution")?;
        for entry in &self.data.status_distribution {
            let share = entry.share.unwrap_or(0.0);
            let filled = (share * SHARE_BAR_WIDTH as f64).round() as usize;
            writeln!(
                f,
                "  {:<7} {:>3}  {:<bw$}  {:>3.0}%",
                entry.status,
                entry.count,
                "█".repeat(filled),
                share * 100.0,
                bw = SHARE_BAR_WIDTH
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for InsightsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.summary.campaign_count == 0 {
            if self.mode == ViewMode::Minimal {
                return Ok(());
            }
            return writeln!(f, "No campaigns to analyze.");
        }

        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_overview(f),
            ViewMode::Standard | ViewMode::Verbose => {
                self.render_overview(f)?;
                writeln!(f)?;
                self.render_performance(f)?;
                writeln!(f)?;
                self.render_distribution(f)
            }
        }
    }
}
