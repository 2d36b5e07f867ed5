use serde::{Deserialize, Serialize};

use crate::{PrimitiveType, SchemaDescriptor};

/// A record type's structure, as declared by its owner.
///
/// This is the concrete [`SchemaDescriptor`] loaded from JSON documents:
///
/// ```json
/// {
///   "type_name": "MyApp.Account",
///   "source": "accounts",
///   "fields": [{ "name": "id", "type": "id" }, { "name": "number", "type": "string" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub type_name: String,
    pub source: String,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type", alias = "field_type")]
    pub field_type: PrimitiveType,
}

impl SchemaField {
    pub fn new(name: &str, field_type: PrimitiveType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    /// Shorthand for a primary-key field.
    pub fn id(name: &str) -> Self {
        Self::new(name, PrimitiveType::Id)
    }

    /// Shorthand for a string field.
    pub fn string(name: &str) -> Self {
        Self::new(name, PrimitiveType::String)
    }

    /// Shorthand for an integer field.
    pub fn integer(name: &str) -> Self {
        Self::new(name, PrimitiveType::Integer)
    }

    /// Shorthand for a float field.
    pub fn float(name: &str) -> Self {
        Self::new(name, PrimitiveType::Float)
    }

    /// Shorthand for a fixed-point decimal field.
    pub fn decimal(name: &str) -> Self {
        Self::new(name, PrimitiveType::Decimal)
    }

    /// Shorthand for a naive (zone-less) timestamp field.
    pub fn naive_datetime(name: &str) -> Self {
        Self::new(name, PrimitiveType::NaiveDatetime)
    }

    /// Shorthand for a time-of-day field.
    pub fn time(name: &str) -> Self {
        Self::new(name, PrimitiveType::Time)
    }

    /// Shorthand for a UUID field.
    pub fn uuid(name: &str) -> Self {
        Self::new(name, PrimitiveType::Uuid)
    }
}

impl RecordSchema {
    pub fn new(type_name: &str, source: &str) -> Self {
        Self {
            type_name: type_name.into(),
            source: source.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a declared field, keeping declaration order.
    #[must_use]
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends the conventional `id`, `inserted_at` and `updated_at` fields
    /// around `fields`, the way generated record types declare them.
    #[must_use]
    pub fn with_system_fields(mut self, fields: Vec<SchemaField>) -> Self {
        self.fields.push(SchemaField::id("id"));
        self.fields.extend(fields);
        self.fields.push(SchemaField::naive_datetime("inserted_at"));
        self.fields.push(SchemaField::naive_datetime("updated_at"));
        self
    }

    /// Parses a schema document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl SchemaDescriptor for RecordSchema {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    fn field_type(&self, field: &str) -> Option<PrimitiveType> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.field_type.clone())
    }
}
