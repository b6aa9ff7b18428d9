//! Console report for one run.

use crate::note::ChartNote;
use std::fmt;

/// Everything a run can print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The newest row, rendered.
    Note(ChartNote),

    /// The table has no rows.
    NotFound,

    /// Configuration, transport or backend failure.
    Failed(String),
}

impl Report {
    /// Map a pipeline result onto the report printed to the console.
    pub fn from_result(result: anyhow::Result<Option<ChartNote>>) -> Self {
        match result {
            Ok(Some(note)) => Report::Note(note),
            Ok(None) => Report::NotFound,
            Err(err) => Report::Failed(format!("{:#}", err)),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Report::Failed(_))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Note(note) => write!(
                f,
                "--- Chart Note for Record ID: {} ---\n\n{}\n\n--- End of Chart Note ---",
                note.record_id, note.body
            ),
            Report::NotFound => write!(f, "No records found."),
            Report::Failed(msg) => write!(f, "An error occurred: {}", msg),
        }
    }
}
