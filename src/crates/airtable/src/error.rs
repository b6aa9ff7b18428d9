//! Error types for the Airtable client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for Airtable operations.
pub type Result<T> = std::result::Result<T, AirtableError>;

/// Errors that can occur when reading rows from Airtable.
#[derive(Debug, Error)]
pub enum AirtableError {
    /// The backend answered with a non-success status.
    ///
    /// The raw response body is kept verbatim as diagnostic text.
    #[error("Error fetching records: {body}")]
    Retrieval { status: StatusCode, body: String },

    /// HTTP request failed before a response was received.
    ///
    /// The transport error is the source; render the chain to see it.
    #[error("HTTP request failed")]
    HttpError(#[from] reqwest::Error),

    /// Response body could not be decoded as a record list.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AirtableError {
    /// Check if this error came from a non-success backend response.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, AirtableError::Retrieval { .. })
    }

    /// HTTP status attached to the error, when there is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AirtableError::Retrieval { status, .. } => Some(*status),
            AirtableError::HttpError(err) => err.status(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AirtableError {
    fn from(err: serde_json::Error) -> Self {
        AirtableError::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_message_carries_body() {
        let err = AirtableError::Retrieval {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: r#"{"error":{"type":"INVALID_SORT_FIELD"}}"#.to_string(),
        };

        assert_eq!(
            err.to_string(),
            r#"Error fetching records: {"error":{"type":"INVALID_SORT_FIELD"}}"#
        );
        assert!(err.is_retrieval());
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[test]
    fn test_config_error_is_not_retrieval() {
        let err = AirtableError::ConfigError("AIRTABLE_BASE_ID is not set".to_string());

        assert!(!err.is_retrieval());
        assert_eq!(err.status(), None);
        assert_eq!(
            err.to_string(),
            "Configuration error: AIRTABLE_BASE_ID is not set"
        );
    }

    #[test]
    fn test_serde_error_maps_to_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AirtableError = json_err.into();

        assert!(matches!(err, AirtableError::InvalidResponse(_)));
    }
}
