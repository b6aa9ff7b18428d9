//! Airtable REST client for the row-listing endpoint.
//!
//! Only the read path is implemented: one `GET` per call, no pagination and
//! no retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use airtable::{AirtableClient, AirtableConfig};
//!
//! let client = AirtableClient::new(AirtableConfig::from_env()?)?;
//! match client.fetch_latest().await? {
//!     Some(record) => println!("newest row: {}", record.id),
//!     None => println!("table is empty"),
//! }
//! ```

use crate::config::AirtableConfig;
use crate::error::{AirtableError, Result};
use crate::record::{ListRecordsResponse, Record};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Sort direction understood by the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One `sort[i]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Query parameters for a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Upper bound on rows returned across all pages.
    pub max_records: Option<u32>,

    /// Sort keys, applied in order.
    pub sort: Vec<SortSpec>,
}

impl ListQuery {
    /// Query for the single newest row by `field`.
    pub fn latest(field: impl Into<String>) -> Self {
        Self {
            max_records: Some(1),
            sort: vec![SortSpec::desc(field)],
        }
    }

    /// Encode as Airtable's bracketed query parameters.
    ///
    /// `maxRecords=1&sort[0][field]=Timestamp&sort[0][direction]=desc`
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(1 + self.sort.len() * 2);

        if let Some(max_records) = self.max_records {
            pairs.push(("maxRecords".to_string(), max_records.to_string()));
        }

        for (index, spec) in self.sort.iter().enumerate() {
            pairs.push((format!("sort[{}][field]", index), spec.field.clone()));
            pairs.push((
                format!("sort[{}][direction]", index),
                spec.direction.as_str().to_string(),
            ));
        }

        pairs
    }
}

/// Airtable API client bound to one table.
#[derive(Clone)]
pub struct AirtableClient {
    config: AirtableConfig,
    table_url: Url,
    client: Client,
}

impl AirtableClient {
    /// Create a new client.
    ///
    /// Fails when the configuration is incomplete, the API root is not a
    /// valid base URL, or the token cannot be sent as a header.
    pub fn new(config: AirtableConfig) -> Result<Self> {
        config.validate()?;

        let table_url = build_table_url(&config)?;
        let headers = default_headers(&config)?;

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .build()?;

        debug!(url = %table_url, "Airtable client created");

        Ok(Self {
            config,
            table_url,
            client,
        })
    }

    /// Row-listing endpoint for the configured table.
    pub fn table_url(&self) -> &Url {
        &self.table_url
    }

    /// Active configuration.
    pub fn config(&self) -> &AirtableConfig {
        &self.config
    }

    /// Issue one list request and return the rows of the first page.
    pub async fn list_records(&self, query: &ListQuery) -> Result<Vec<Record>> {
        debug!(
            url = %self.table_url,
            max_records = ?query.max_records,
            sort_keys = query.sort.len(),
            "Listing Airtable records"
        );

        let response = self
            .client
            .get(self.table_url.clone())
            .query(&query.to_query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    warn!(status = %status, error = %err, "Failed to read Airtable error body");
                    String::new()
                }
            };
            // Size only; error bodies may echo request data.
            warn!(
                status = %status,
                bytes = body.len(),
                "Airtable returned a non-success status"
            );
            return Err(AirtableError::Retrieval { status, body });
        }

        let body = response.text().await?;
        let list: ListRecordsResponse = serde_json::from_str(&body)?;

        debug!(
            count = list.records.len(),
            has_offset = list.offset.is_some(),
            "Airtable records received"
        );

        Ok(list.records)
    }

    /// Fetch the newest row ordered by the configured timestamp field.
    ///
    /// Returns `Ok(None)` when the table has no rows.
    pub async fn fetch_latest(&self) -> Result<Option<Record>> {
        let query = ListQuery::latest(self.config.sort_field.clone());
        let record = self.list_records(&query).await?.into_iter().next();

        match &record {
            Some(record) => info!(record_id = %record.id, "Fetched latest record"),
            None => info!(sort_field = %self.config.sort_field, "Table has no records"),
        }

        Ok(record)
    }
}

fn build_table_url(config: &AirtableConfig) -> Result<Url> {
    let mut url = Url::parse(&config.api_url).map_err(|e| {
        AirtableError::ConfigError(format!("Invalid API URL '{}': {}", config.api_url, e))
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            AirtableError::ConfigError(format!(
                "API URL '{}' cannot have path segments",
                config.api_url
            ))
        })?
        .pop_if_empty()
        .push(&config.base_id)
        .push(&config.table_name);

    Ok(url)
}

fn default_headers(config: &AirtableConfig) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token)).map_err(|_| {
        AirtableError::ConfigError("Access token contains invalid header characters".to_string())
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}
