//! Connection settings for an Airtable table.
//!
//! # Example
//!
//! ```rust,ignore
//! use airtable::AirtableConfig;
//!
//! let config = AirtableConfig::from_env()?
//!     .with_sort_field("Submitted");
//! ```

use crate::error::{AirtableError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the personal access token.
pub const TOKEN_VAR: &str = "AIRTABLE_PERSONAL_ACCESS_TOKEN";
/// Environment variable holding the base (collection) identifier.
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";
/// Environment variable holding the table name or identifier.
pub const TABLE_NAME_VAR: &str = "AIRTABLE_TABLE_NAME";
/// Environment variable overriding the API root.
pub const API_URL_VAR: &str = "AIRTABLE_API_URL";
/// Environment variable overriding the timestamp sort field.
pub const SORT_FIELD_VAR: &str = "AIRTABLE_SORT_FIELD";

/// Default Airtable REST root.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
/// Field the newest row is selected by.
pub const DEFAULT_SORT_FIELD: &str = "Timestamp";

/// Configuration for reading rows from one Airtable table.
#[derive(Clone, Serialize, Deserialize)]
pub struct AirtableConfig {
    /// Personal access token sent as a bearer credential.
    pub token: String,

    /// Base identifier, e.g. `appXXXXXXXXXXXXXX`.
    pub base_id: String,

    /// Table name or table identifier.
    pub table_name: String,

    /// API root the base and table are appended to.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timestamp field rows are ordered by.
    #[serde(default = "default_sort_field")]
    pub sort_field: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl AirtableConfig {
    /// Create a new configuration with default API root and sort field.
    pub fn new(
        token: impl Into<String>,
        base_id: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            base_id: base_id.into(),
            table_name: table_name.into(),
            api_url: default_api_url(),
            sort_field: default_sort_field(),
            user_agent: default_user_agent(),
        }
    }

    /// Create configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Token, base and table are required; API root and sort field fall back
    /// to their defaults. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                AirtableError::ConfigError(format!("Environment variable '{}' is not set", key))
            })
        };

        let mut config = Self::new(
            require(TOKEN_VAR)?,
            require(BASE_ID_VAR)?,
            require(TABLE_NAME_VAR)?,
        );
        if let Some(api_url) = get(API_URL_VAR) {
            config = config.with_api_url(api_url);
        }
        if let Some(sort_field) = get(SORT_FIELD_VAR) {
            config = config.with_sort_field(sort_field);
        }

        Ok(config)
    }

    /// Set the API root.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the timestamp field used to pick the newest row.
    pub fn with_sort_field(mut self, sort_field: impl Into<String>) -> Self {
        self.sort_field = sort_field.into();
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reject blank values before any request is built.
    pub fn validate(&self) -> Result<()> {
        let required = [
            (TOKEN_VAR, &self.token),
            (BASE_ID_VAR, &self.base_id),
            (TABLE_NAME_VAR, &self.table_name),
            (API_URL_VAR, &self.api_url),
            (SORT_FIELD_VAR, &self.sort_field),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AirtableError::ConfigError(format!(
                    "'{}' must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }
}

// Hand-written so the token never reaches logs.
impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("token", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("api_url", &self.api_url)
            .field("sort_field", &self.sort_field)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_sort_field() -> String {
    DEFAULT_SORT_FIELD.to_string()
}

fn default_user_agent() -> String {
    format!("chartnote-airtable/{}", env!("CARGO_PKG_VERSION"))
}
