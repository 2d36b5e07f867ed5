use serde::{Deserialize, Serialize};
use std::fmt;

/// The primitive type tag of a schema field.
///
/// The known variants cover the tags the classifier has explicit rules for.
/// Every other tag is kept verbatim in [`PrimitiveType::Other`] so unknown
/// types survive a JSON round trip and still classify (generically).
///
/// Serializes as a bare snake_case string: `"utc_datetime_usec"`, `"boolean"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrimitiveType {
    Id,
    Integer,
    Float,
    Decimal,
    String,
    Binary,
    BinaryId,
    NaiveDatetime,
    NaiveDatetimeUsec,
    UtcDatetime,
    UtcDatetimeUsec,
    Time,
    TimeUsec,
    Uuid,
    Other(String),
}

impl PrimitiveType {
    /// The raw tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id => "id",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Binary => "binary",
            Self::BinaryId => "binary_id",
            Self::NaiveDatetime => "naive_datetime",
            Self::NaiveDatetimeUsec => "naive_datetime_usec",
            Self::UtcDatetime => "utc_datetime",
            Self::UtcDatetimeUsec => "utc_datetime_usec",
            Self::Time => "time",
            Self::TimeUsec => "time_usec",
            Self::Uuid => "uuid",
            Self::Other(tag) => tag,
        }
    }

    /// True for the variants the classifier has a dedicated rule for.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for PrimitiveType {
    fn from(tag: &str) -> Self {
        match tag {
            "id" => Self::Id,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "string" => Self::String,
            "binary" => Self::Binary,
            "binary_id" => Self::BinaryId,
            "naive_datetime" => Self::NaiveDatetime,
            "naive_datetime_usec" => Self::NaiveDatetimeUsec,
            "utc_datetime" => Self::UtcDatetime,
            "utc_datetime_usec" => Self::UtcDatetimeUsec,
            "time" => Self::Time,
            "time_usec" => Self::TimeUsec,
            "uuid" => Self::Uuid,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PrimitiveType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<PrimitiveType> for String {
    fn from(ty: PrimitiveType) -> Self {
        match ty {
            PrimitiveType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
