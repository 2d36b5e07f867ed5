use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ActionBinding, FieldDescriptor, ResolveError, SubTitle};

/// A configuration key the resolver can supply a default for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    Module,
    Name,
    Source,
    Title,
    Fields,
}

impl ConfigKey {
    /// Order in which [`crate::parse`] resolves keys.
    ///
    /// No key reads another key's resolved value; `Fields` is computed
    /// from the schema alone.
    pub const ORDER: [ConfigKey; 5] = [
        ConfigKey::Module,
        ConfigKey::Name,
        ConfigKey::Source,
        ConfigKey::Title,
        ConfigKey::Fields,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Name => "name",
            Self::Source => "source",
            Self::Title => "title",
            Self::Fields => "fields",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.strip_prefix(':').unwrap_or(s);
        Self::ORDER
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| ResolveError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved view configuration handed to a renderer.
///
/// Also serves as the accumulator [`crate::parse`] folds into: `actions`,
/// `sub_title` and `template` carry over from the incoming value unless
/// options replace them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub actions: Vec<ActionBinding>,
    #[serde(default)]
    pub sub_title: SubTitle,
    #[serde(default)]
    pub template: Option<String>,
}

impl ViewConfig {
    /// Looks up a resolved field by identifier.
    pub fn field(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Resolved field identifiers, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }

    /// Parses a configuration document, e.g. a saved accumulator.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
