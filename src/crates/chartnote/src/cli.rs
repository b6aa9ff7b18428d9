//! Command-line surface.
//!
//! Every option can also come from the environment (or a `.env` file loaded
//! before parsing). The three credentials are optional here so that a
//! missing value is reported like any other failure instead of as a usage
//! error.

use airtable::config::{
    API_URL_VAR, BASE_ID_VAR, SORT_FIELD_VAR, TABLE_NAME_VAR, TOKEN_VAR,
};
use airtable::{AirtableConfig, AirtableError, DEFAULT_API_URL, DEFAULT_SORT_FIELD};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "chartnote")]
#[command(
    about = "Print the most recent Airtable submission as a clinical chart note",
    long_about = None
)]
#[command(version = crate::version::VERSION)]
pub struct Cli {
    /// Airtable personal access token
    #[arg(long, env = TOKEN_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Base identifier (appXXXXXXXXXXXXXX)
    #[arg(long, env = BASE_ID_VAR)]
    pub base_id: Option<String>,

    /// Table name or identifier
    #[arg(long = "table", env = TABLE_NAME_VAR)]
    pub table_name: Option<String>,

    /// Airtable API root
    #[arg(long, env = API_URL_VAR, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timestamp field the newest row is selected by
    #[arg(long, env = SORT_FIELD_VAR, default_value = DEFAULT_SORT_FIELD)]
    pub sort_field: String,
}

impl Cli {
    /// Resolve the backend configuration.
    pub fn to_config(&self) -> airtable::Result<AirtableConfig> {
        let token = required(self.token.as_deref(), TOKEN_VAR, "--token")?;
        let base_id = required(self.base_id.as_deref(), BASE_ID_VAR, "--base-id")?;
        let table_name = required(self.table_name.as_deref(), TABLE_NAME_VAR, "--table")?;

        let config = AirtableConfig::new(token, base_id, table_name)
            .with_api_url(self.api_url.clone())
            .with_sort_field(self.sort_field.clone())
            .with_user_agent(format!("chartnote/{}", crate::version::VERSION));
        config.validate()?;

        Ok(config)
    }
}

fn required(value: Option<&str>, var: &str, flag: &str) -> airtable::Result<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AirtableError::ConfigError(format!(
                "Environment variable '{}' is not set (or pass {})",
                var, flag
            ))
        })
}
