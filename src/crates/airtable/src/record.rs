//! Row model returned by the Airtable list endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One table row: an opaque identifier plus its field map.
///
/// Airtable omits empty fields entirely, so absence and emptiness are both
/// represented by a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier, e.g. `recXXXXXXXXXXXXXX`.
    pub id: String,

    /// Creation time assigned by the backend.
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,

    /// Field name to value.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Create a record with the given id and no fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_time: None,
            fields: Map::new(),
        }
    }

    /// Add a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a raw field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Body of `GET /v0/{base}/{table}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,

    /// Pagination cursor. Never followed; only the first page is read.
    #[serde(default)]
    pub offset: Option<String>,
}
