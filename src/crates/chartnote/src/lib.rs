//! # chartnote
//!
//! Retrieves the most recently submitted row of an Airtable intake table and
//! renders it as a plain-text clinical chart note.
//!
//! The pipeline is strictly linear: one list request for the newest row by
//! timestamp ([`airtable::AirtableClient::fetch_latest`]), one pure
//! formatting pass ([`note::render_chart_note`]), one console report
//! ([`report::Report`]).
//!
//! ```rust,no_run
//! use airtable::AirtableConfig;
//! use chartnote::{fetch_latest_note, Report};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AirtableConfig::from_env()?;
//! let report = Report::from_result(fetch_latest_note(config).await);
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod note;
pub mod report;
pub mod version;

pub use app::{fetch_latest_note, run};
pub use cli::Cli;
pub use note::{field_text, render_chart_note, ChartNote};
pub use report::Report;
