//! One-shot comparison: locate, fetch, compare, and emit the HTML report.

use crate::app::App;
use crate::cli::Cli;
use crate::error::{AppError, Result};
use snapdiff_archive::Timestamp;

pub async fn run(app: &App, url: &str, cli: &Cli) -> Result<()> {
    let timestamp = cli
        .timestamp
        .as_deref()
        .map(str::parse::<Timestamp>)
        .transpose()
        .map_err(|source| AppError::InvalidTimestamp { source })?;
    let comparison = app.compare(url, timestamp.as_ref(), cli.strategy).await?;
    tracing::info!(archive_url = %comparison.archive_url, "comparison finished");

    let html = app
        .renderer
        .results_page(&comparison.archive_url, &comparison.live_url, &comparison.report)
        .map_err(|source| AppError::Render { source })?;
    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, html).await.map_err(|source| AppError::Write {
                path: path.display().to_string(),
                source,
            })?;
            print!("{}", app.renderer.text_summary(&comparison.report));
            println!("Results saved to {}", path.display());
        },
        None => println!("{html}"),
    }
    Ok(())
}
