/// Shared serializable output types.
///
/// These types are what gets written to stdout in the JSON formats. They are
/// decoupled from the internal `SelectedRow` type.
use serde::{Deserialize, Serialize};

use crate::select::{SelectError, SelectedRow};

/// One input line's selected fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowOutput {
    /// 1-based line number in the input.
    pub line: usize,
    /// Kept fields, in field order.
    pub fields: Vec<FieldOutput>,
    /// Kept values concatenated with no separator.
    pub joined: String,
}

/// A single kept field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldOutput {
    /// Zero-based column index.
    pub index: usize,
    /// Field text as split from the line.
    pub value: String,
}

impl From<&SelectedRow> for RowOutput {
    fn from(row: &SelectedRow) -> Self {
        Self {
            line: row.line,
            fields: row
                .fields
                .iter()
                .map(|(index, value)| FieldOutput {
                    index: *index,
                    value: value.clone(),
                })
                .collect(),
            joined: row.joined(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `SelectError`.
    #[must_use]
    pub fn from_select_error(err: &SelectError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
