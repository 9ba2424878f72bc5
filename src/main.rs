mod app;
mod cli;
mod error;
mod run;
mod web;

use crate::app::App;
use crate::cli::Cli;
use crate::error::{AppError, Result};
use clap::Parser;
use snapdiff_config::Config;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "snapdiff=info".into()),
        )
        .init();
    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(error = ?error, "exiting with failure");
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().map_err(|source| AppError::Config { source })?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    let app = App::from_config(config)?;
    if cli.web {
        let addr = app.config.listen_addr();
        web::serve(Arc::new(app), addr).await
    } else {
        // Infallible: clap enforces --url whenever --web is absent.
        let url = cli.url.clone().expect("clap requires --url without --web");
        run::run(&app, &url, &cli).await
    }
}
