use std::path::Path;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::infra::MediaWikiClient;
use crate::output::write_csv_file;
use crate::parser::extract_timeline;

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub total_rows: usize,
    pub dated_rows: usize,
    pub output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Fetch the configured page, extract the timeline and write the CSV.
    #[instrument(skip(config), fields(page = %config.page))]
    pub async fn run(config: &Config) -> Result<PipelineResult> {
        let client = MediaWikiClient::new(config)?;
        let html = client.fetch_page_html().await?;
        Self::run_from_html(&html, &config.output)
    }

    /// Same as [`Pipeline::run`] for HTML that is already on hand.
    #[instrument(skip(html), fields(bytes = html.len()))]
    pub fn run_from_html(html: &str, output: &Path) -> Result<PipelineResult> {
        let rows = extract_timeline(html)?;
        let total_rows = rows.len();
        let dated_rows = rows.iter().filter(|r| r.release_date_na().is_some()).count();

        let output_file = write_csv_file(rows, output)?;

        info!(total_rows, dated_rows, "Pipeline finished");
        Ok(PipelineResult {
            total_rows,
            dated_rows,
            output_file: output_file.display().to_string(),
        })
    }
}
