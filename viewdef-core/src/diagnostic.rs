use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal observation made while merging options.
///
/// Diagnostics never change the resolved configuration. [`crate::parse`]
/// logs them; [`crate::parse_with_diagnostics`] also hands them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum Diagnostic {
    /// `add_opt` named a field that is already in the list. It was skipped.
    DuplicateField(String),
    /// `remove` named a field that is not in the list. Nothing was removed.
    MissingField(String),
}

impl Diagnostic {
    /// The field identifier the diagnostic is about.
    pub fn field(&self) -> &str {
        match self {
            Self::DuplicateField(field) | Self::MissingField(field) => field,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField(field) => write!(f, "field `{field}` already present, not added"),
            Self::MissingField(field) => write!(f, "field `{field}` not present, nothing removed"),
        }
    }
}
