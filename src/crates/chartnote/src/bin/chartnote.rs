//! chartnote CLI
//!
//! Prints the newest chart note, "No records found.", or the error. Always
//! exits with status zero.

use chartnote::{version, Cli, Report};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Must run before parsing so clap's `env` lookups see the file.
    let dotenv_result = dotenv::dotenv();

    // Logs go to stderr; stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match dotenv_result {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", Report::Failed(e.to_string().trim_end().to_string()));
            return;
        }
    };

    tracing::debug!(version = %version::short_version(), "Starting chartnote");

    let report = chartnote::run(&cli).await;
    if report.is_failure() {
        tracing::warn!("Run finished with an error");
    }

    println!("{}", report);
}
