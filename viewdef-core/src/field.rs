use serde::{Deserialize, Serialize};
use std::fmt;
use viewdef_model::PrimitiveType;

use crate::classify::{classify, label, placeholder};

/// The kind of input control a field renders as.
///
/// Serializes as the HTML input type: `"number"`, `"text"`,
/// `"datetime-local"`, `"time"`. Unmapped primitive types carry their raw
/// type tag through [`WidgetKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetKind {
    Number,
    Text,
    DatetimeLocal,
    Time,
    Other(String),
}

impl WidgetKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::DatetimeLocal => "datetime-local",
            Self::Time => "time",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for WidgetKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "number" => Self::Number,
            "text" => Self::Text,
            "datetime-local" => Self::DatetimeLocal,
            "time" => Self::Time,
            _ => Self::Other(kind),
        }
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved presentation metadata for one field.
///
/// `widget_kind`, `length`, `precision` and `scale` depend only on the
/// primitive type; `label` and `placeholder` also read the field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub field: String,
    pub label: String,
    pub placeholder: String,
    pub widget_kind: WidgetKind,
    pub length: u32,
    pub precision: u32,
    pub scale: u32,
}

impl FieldDescriptor {
    /// Builds the default descriptor for `field` of type `ty`.
    pub fn for_field(field: &str, ty: &PrimitiveType) -> Self {
        let class = classify(ty);
        Self {
            field: field.to_string(),
            label: label(Some(field)),
            placeholder: placeholder(field, ty),
            widget_kind: class.widget_kind,
            length: class.length,
            precision: class.precision,
            scale: class.scale,
        }
    }
}
