//! Read-only Airtable client used by `chartnote`.
//!
//! The crate covers exactly one endpoint, the row listing of a single table,
//! and exposes the newest-row lookup the chart note pipeline is built on.
//!
//! # Example
//!
//! ```rust,ignore
//! use airtable::{AirtableClient, AirtableConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AirtableConfig::from_env()?;
//!     let client = AirtableClient::new(config)?;
//!
//!     if let Some(record) = client.fetch_latest().await? {
//!         println!("{} has {} fields", record.id, record.fields.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod record;

// Re-export commonly used types
pub use client::{AirtableClient, ListQuery, SortDirection, SortSpec};
pub use config::{AirtableConfig, DEFAULT_API_URL, DEFAULT_SORT_FIELD};
pub use error::{AirtableError, Result};
pub use record::{ListRecordsResponse, Record};
pub use reqwest::StatusCode;
