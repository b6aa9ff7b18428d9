//! Chart note formatter.
//!
//! Turns one row's field map into the fixed plain-text chart note layout.
//! Rendering is pure: values are copied verbatim, nothing is validated or
//! escaped, and absent fields fall back to a sentinel.

use airtable::Record;
use serde_json::{Map, Value};

/// Placeholder for an absent field.
pub const MISSING: &str = "N/A";

/// Column names of the intake table.
pub mod fields {
    pub const PATIENT_FIRST: &str = "Patient_First";
    pub const LAST_NAME: &str = "Last_Name";
    pub const CHART_NUMBER: &str = "Chart_Number";
    pub const PROVIDER: &str = "Provider";
    pub const TIMESTAMP: &str = "Timestamp";
    pub const CHIEF_COMPLAINT: &str = "Chief_Complaint_PROBLEM";
    pub const PRIMARY_DX: &str = "1st_DX";
    pub const PRIMARY_DX_COMMENT: &str = "1_DX_Comment";
    pub const SECONDARY_DX: &str = "2nd_DX_if_Applicable";
    pub const SECONDARY_DX_COMMENT: &str = "2_DX_Comment";
    pub const ETIOLOGY: &str = "Etiology_ANALYZE";
    pub const TREATMENT_OFFERED: &str = "TREATMENT_Offered";
    pub const CONSENT: &str = "What_the_Patient_CONSENTed_To";
    pub const PLAN_SHORT_TERM: &str = "Patient_Treatment_ST_Todat_3mo";
    pub const PLAN_MEDIUM_TERM: &str = "Patient_Treatment_MT_3mo-1year";
    pub const PLAN_LONG_TERM: &str = "Patient_Treatment_LT_over_1year";
    pub const PROGNOSIS: &str = "Prognosis_To_Patient_Expectations";
    pub const EDUCATION: &str = "Education";
}

/// A rendered chart note and the row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartNote {
    pub record_id: String,
    pub body: String,
}

impl ChartNote {
    /// Render the note for `record`.
    pub fn from_record(record: &Record) -> Self {
        Self {
            record_id: record.id.clone(),
            body: render_chart_note(&record.fields),
        }
    }
}

/// Opaque text for one field, or `None` when it is absent or empty.
///
/// Strings are returned verbatim. Numbers and booleans use their JSON text.
/// Arrays (linked records, multi-selects) are joined with `", "`. Objects
/// (collaborators, attachments) use their `name`, `email` or `url` member,
/// falling back to compact JSON.
pub fn field_text(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields
        .get(name)
        .and_then(value_text)
        .filter(|text| !text.is_empty())
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Object(object) => ["name", "email", "url"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| Some(value.to_string())),
    }
}

/// Whether a value counts as filled in: `false`, zero and empty collections
/// do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(object) => !object.is_empty(),
    }
}

/// Render the chart note body.
///
/// The secondary diagnosis block appears only when its field is filled in
/// (not `false`, zero or empty).
/// The name parts render as empty text when absent; every other absent field
/// renders as [`MISSING`].
pub fn render_chart_note(fields: &Map<String, Value>) -> String {
    let text = |name: &str| field_text(fields, name).unwrap_or_else(|| MISSING.to_string());

    let mut lines = vec![
        "Patient Information".to_string(),
        format!("- Name: {}", patient_name(fields)),
        format!("- Chart Number: {}", text(fields::CHART_NUMBER)),
        format!("- Provider: {}", text(fields::PROVIDER)),
        format!("- Timestamp: {}", text(fields::TIMESTAMP)),
        String::new(),
        "Chief Complaint".to_string(),
        format!("- {}", text(fields::CHIEF_COMPLAINT)),
        String::new(),
        "Diagnoses".to_string(),
        format!("1. Primary Diagnosis: {}", text(fields::PRIMARY_DX)),
        format!("    - {}", text(fields::PRIMARY_DX_COMMENT)),
    ];

    if let Some(secondary) = fields
        .get(fields::SECONDARY_DX)
        .filter(|value| is_truthy(value))
        .and_then(|_| field_text(fields, fields::SECONDARY_DX))
    {
        lines.push(format!("2. Secondary Diagnosis: {}", secondary));
        lines.push(format!("    - {}", text(fields::SECONDARY_DX_COMMENT)));
    }

    lines.extend([
        String::new(),
        "Etiology Analysis".to_string(),
        format!("- {}", text(fields::ETIOLOGY)),
        String::new(),
        "Treatment Offered".to_string(),
        format!("- {}", text(fields::TREATMENT_OFFERED)),
        String::new(),
        "Patient Consent".to_string(),
        format!("- {}", text(fields::CONSENT)),
        String::new(),
        "Treatment Plan".to_string(),
        format!(
            "- Short Term (Today to 3 months): {}",
            text(fields::PLAN_SHORT_TERM)
        ),
        format!(
            "- Medium Term (3 months to 1 year): {}",
            text(fields::PLAN_MEDIUM_TERM)
        ),
        format!("- Long Term (Over 1 year): {}", text(fields::PLAN_LONG_TERM)),
        String::new(),
        "Prognosis and Patient Expectations".to_string(),
        format!("- {}", text(fields::PROGNOSIS)),
        String::new(),
        "Education Provided".to_string(),
        format!("- {}", text(fields::EDUCATION)),
        String::new(),
        "---".to_string(),
    ]);

    lines.join("\n")
}

fn patient_name(fields: &Map<String, Value>) -> String {
    [fields::PATIENT_FIRST, fields::LAST_NAME]
        .iter()
        .filter_map(|name| field_text(fields, name))
        .collect::<Vec<_>>()
        .join(" ")
}
