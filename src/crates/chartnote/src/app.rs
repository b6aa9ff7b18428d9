//! Fetch → format pipeline.

use crate::cli::Cli;
use crate::note::ChartNote;
use crate::report::Report;
use airtable::{AirtableClient, AirtableConfig};
use tracing::{debug, info};

/// Fetch the newest row and render it.
///
/// `Ok(None)` means the table is empty; nothing is formatted in that case.
pub async fn fetch_latest_note(config: AirtableConfig) -> anyhow::Result<Option<ChartNote>> {
    debug!(
        base_id = %config.base_id,
        table = %config.table_name,
        sort_field = %config.sort_field,
        "Fetching latest record"
    );

    let client = AirtableClient::new(config)?;
    let Some(record) = client.fetch_latest().await? else {
        return Ok(None);
    };

    let note = ChartNote::from_record(&record);
    info!(
        record_id = %note.record_id,
        fields = record.fields.len(),
        "Rendered chart note"
    );

    Ok(Some(note))
}

/// Run once and produce the report to print. Never fails.
pub async fn run(cli: &Cli) -> Report {
    Report::from_result(pipeline(cli).await)
}

async fn pipeline(cli: &Cli) -> anyhow::Result<Option<ChartNote>> {
    let config = cli.to_config()?;
    fetch_latest_note(config).await
}
