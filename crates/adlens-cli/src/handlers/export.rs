use adlens_engine::{ViewState, click_through_rate};
use adlens_types::CampaignRecord;
use anyhow::{Context, Result};
use std::borrow::Borrow;
use std::io;
use std::path::PathBuf;

use super::{HandlerContext, load_campaigns};
use crate::args::{OutputFormat, SelectionArgs, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

const HEADER: [&str; 7] = [
    "id",
    "name",
    "status",
    "clicks",
    "cost",
    "impressions",
    "ctr",
];

/// Export the filtered, sorted table as CSV.
///
/// Without `--output` the CSV goes to stdout and nothing else is printed.
pub async fn handle(
    ctx: &ExecutionContext,
    selection: &SelectionArgs,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let (status_filter, sort_key, sort_direction) = selection.resolve(ctx.view_defaults());
    let controller = load_campaigns(
        ctx,
        ViewState::with_selection(status_filter, sort_key, sort_direction),
    )
    .await?;
    let records = controller.state().visible_records();

    let Some(path) = output else {
        write_csv(csv::Writer::from_writer(io::stdout()), records)?;
        return Ok(());
    };

    let writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(writer, records)?;
    tracing::info!(count = records.len(), path = %path.display(), "campaigns exported");

    let result = presenters::present_export(records.len(), &path.display().to_string());
    HandlerContext::new(format, &ViewModeArgs::default()).render(result)
}

fn write_csv<W, R>(mut wtr: csv::Writer<W>, records: &[R]) -> Result<()>
where
    W: io::Write,
    R: Borrow<CampaignRecord>,
{
    wtr.write_record(HEADER)?;

    for record in records {
        let record = record.borrow();
        wtr.write_record([
            record.id.to_string(),
            record.name.clone(),
            record.status.to_string(),
            record.clicks.to_string(),
            format!("{:.2}", record.cost),
            record.impressions.to_string(),
            click_through_rate(record)
                .map(|ctr| format!("{:.2}", ctr))
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlens_types::CampaignStatus;

    #[test]
    fn test_write_csv_quotes_and_blank_ctr() {
        let records = vec![
            CampaignRecord::new(1, "Sale, Summer", CampaignStatus::Active, 150, 45.99, 1000),
            CampaignRecord::new("x-2", "Launch", CampaignStatus::Paused, 0, 0.0, 0),
        ];
        let mut buffer = Vec::new();
        write_csv(csv::Writer::from_writer(&mut buffer), &records).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "id,name,status,clicks,cost,impressions,ctr\n\
             1,\"Sale, Summer\",Active,150,45.99,1000,15.00\n\
             x-2,Launch,Paused,0,0.00,0,\n"
        );
    }
}
