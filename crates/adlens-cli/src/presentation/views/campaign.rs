use std::fmt;

use crate::presentation::formatters::number::{
    MISSING_RATIO, NOT_AVAILABLE, format_currency, format_optional_currency,
    format_optional_percent, format_thousands,
};
use crate::presentation::formatters::text;
use crate::presentation::view_models::{
    CampaignCreatedViewModel, CampaignDetailViewModel, CampaignListViewModel,
    CampaignRowViewModel, CreateView, ExportViewModel, SummaryViewModel, ViewMode,
};

const NAME_MAX_WIDTH: usize = 32;

// --------------------------------------------------------
// Campaign List View
// --------------------------------------------------------

impl CreateView for CampaignListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CampaignListView { data: self, mode })
    }
}

struct CampaignListView<'a> {
    data: &'a CampaignListViewModel,
    mode: ViewMode,
}

struct Columns {
    id: usize,
    name: usize,
}

impl<'a> CampaignListView<'a> {
    fn columns(&self) -> Columns {
        let ids: Vec<String> = self.data.campaigns.iter().map(|c| c.id.to_string()).collect();
        Columns {
            id: text::column_width(ids.iter().map(String::as_str), 2, 12),
            name: text::column_width(
                self.data.campaigns.iter().map(|c| c.name.as_str()),
                4,
                NAME_MAX_WIDTH,
            ),
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for campaign in &self.data.campaigns {
            writeln!(f, "{}", campaign.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.campaigns.is_empty() {
            return writeln!(f, "No campaigns found.");
        }

        for campaign in &self.data.campaigns {
            writeln!(
                f,
                "{} {} [{}] {} clicks, {}, {} CTR",
                campaign.id,
                campaign.name,
                campaign.status,
                format_thousands(campaign.clicks),
                format_currency(campaign.cost),
                format_optional_percent(campaign.ctr, MISSING_RATIO)
            )?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        if self.data.campaigns.is_empty() {
            writeln!(f, "No campaigns found.")?;
            return self.show_selection(f);
        }

        let cols = self.columns();
        write!(
            f,
            "{:<idw$}  {:<nw$}  {:<6}  {:>8}  {:>10}  {:>11}  {:>7}",
            "ID",
            "NAME",
            "STATUS",
            "CLICKS",
            "COST",
            "IMPRESSIONS",
            "CTR",
            idw = cols.id,
            nw = cols.name
        )?;
        if verbose {
            write!(f, "  {:>8}", "CPC")?;
        }
        writeln!(f, "  TREND")?;

        for campaign in &self.data.campaigns {
            self.render_row(f, campaign, &cols, verbose)?;
        }

        self.show_selection(f)
    }

    fn render_row(
        &self,
        f: &mut fmt::Formatter,
        campaign: &CampaignRowViewModel,
        cols: &Columns,
        verbose: bool,
    ) -> fmt::Result {
        write!(
            f,
            "{:<idw$}  {:<nw$}  {:<6}  {:>8}  {:>10}  {:>11}  {:>7}",
            campaign.id.to_string(),
            text::truncate(&campaign.name, cols.name),
            campaign.status,
            format_thousands(campaign.clicks),
            format_currency(campaign.cost),
            format_thousands(campaign.impressions),
            format_optional_percent(campaign.ctr, MISSING_RATIO),
            idw = cols.id,
            nw = cols.name
        )?;
        if verbose {
            write!(
                f,
                "  {:>8}",
                format_optional_currency(campaign.cpc, MISSING_RATIO)
            )?;
        }
        writeln!(f, "  {}", campaign.trend)
    }

    fn show_selection(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Showing {} of {} campaigns (status: {}, sort: {} {})",
            self.data.campaigns.len(),
            self.data.total_count,
            self.data.status_filter,
            self.data.sort_key,
            self.data.sort_direction
        )
    }
}

impl<'a> fmt::Display for CampaignListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

// --------------------------------------------------------
// Summary View
// --------------------------------------------------------

impl CreateView for SummaryViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SummaryView { data: self, mode })
    }
}

struct SummaryView<'a> {
    data: &'a SummaryViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = vec![
            ("Campaigns", self.data.campaign_count.to_string()),
            ("Total Clicks", format_thousands(self.data.total_clicks)),
            ("Total Cost", format_currency(self.data.total_cost)),
            (
                "Total Impressions",
                format_thousands(self.data.total_impressions),
            ),
        ];
        if self.mode == ViewMode::Verbose {
            rows.push((
                "Overall CTR",
                format_optional_percent(self.data.ctr, NOT_AVAILABLE),
            ));
            rows.push((
                "Average CPC",
                format_optional_currency(self.data.cpc, NOT_AVAILABLE),
            ));
        }

        for (label, value) in rows {
            writeln!(f, "{:<18}{:>12}", label, value)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Detail Views
// --------------------------------------------------------

fn write_campaign_detail(f: &mut fmt::Formatter, campaign: &CampaignRowViewModel) -> fmt::Result {
    writeln!(f, "{} (#{})", campaign.name, campaign.id)?;
    writeln!(f, "  {:<12} {}", "Status", campaign.status)?;
    writeln!(f, "  {:<12} {}", "Clicks", format_thousands(campaign.clicks))?;
    writeln!(f, "  {:<12} {}", "Cost", format_currency(campaign.cost))?;
    writeln!(
        f,
        "  {:<12} {}",
        "Impressions",
        format_thousands(campaign.impressions)
    )?;
    writeln!(
        f,
        "  {:<12} {}",
        "CTR",
        format_optional_percent(campaign.ctr, MISSING_RATIO)
    )?;
    writeln!(
        f,
        "  {:<12} {}",
        "CPC",
        format_optional_currency(campaign.cpc, MISSING_RATIO)
    )?;
    writeln!(f, "  {:<12} {}", "Trend", campaign.trend)
}

impl CreateView for CampaignDetailViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CampaignDetailView { data: self })
    }
}

struct CampaignDetailView<'a> {
    data: &'a CampaignDetailViewModel,
}

impl<'a> fmt::Display for CampaignDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_campaign_detail(f, &self.data.campaign)
    }
}

impl CreateView for CampaignCreatedViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CampaignCreatedView { data: self })
    }
}

struct CampaignCreatedView<'a> {
    data: &'a CampaignCreatedViewModel,
}

impl<'a> fmt::Display for CampaignCreatedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_campaign_detail(f, &self.data.campaign)?;
        writeln!(f, "\nStored at {}", self.data.endpoint)
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView { data: self })
    }
}

struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exported {} campaigns to {}",
            self.data.exported_count, self.data.output_path
        )
    }
}
