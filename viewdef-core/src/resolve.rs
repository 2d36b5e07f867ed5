//! Default values for the resolvable configuration keys.

use convert_case::{Case, Casing};
use tracing::debug;
use viewdef_model::{PrimitiveType, SchemaDescriptor};

use crate::{ConfigKey, FieldDescriptor, capitalize};

/// Fields managed by the storage layer, never listed by default.
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "inserted_at", "updated_at"];

/// The default for one [`ConfigKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    Text(String),
    Fields(Vec<FieldDescriptor>),
}

impl DefaultValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Fields(_) => None,
        }
    }

    pub fn as_fields(&self) -> Option<&[FieldDescriptor]> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::Text(_) => None,
        }
    }
}

/// Computes the default for `key` from `schema`.
pub fn default_value(schema: &dyn SchemaDescriptor, key: ConfigKey) -> DefaultValue {
    match key {
        ConfigKey::Module => DefaultValue::Text(default_module(schema)),
        ConfigKey::Name => DefaultValue::Text(default_name(schema)),
        ConfigKey::Source => DefaultValue::Text(default_source(schema)),
        ConfigKey::Title => DefaultValue::Text(default_title(schema)),
        ConfigKey::Fields => DefaultValue::Fields(default_fields(schema)),
    }
}

/// Snake-cased last segment of the type name: `AccountReceivable` becomes
/// `account_receivable`.
pub fn default_module(schema: &dyn SchemaDescriptor) -> String {
    schema.type_segment().to_case(Case::Snake)
}

/// Title-cased last segment of the type name: `AccountReceivable` becomes
/// `Account Receivable`.
///
/// Capitalization runs over the snake-cased [`default_module`] form, so
/// acronyms and digit runs become their own words: `HTTPServer` becomes
/// `Http Server` and `Address2` becomes `Address 2`.
pub fn default_name(schema: &dyn SchemaDescriptor) -> String {
    capitalize(&default_module(schema))
}

pub fn default_source(schema: &dyn SchemaDescriptor) -> String {
    schema.source().to_string()
}

/// Title-cased storage identifier: `account_receivables` becomes
/// `Account Receivables`.
pub fn default_title(schema: &dyn SchemaDescriptor) -> String {
    capitalize(schema.source())
}

/// One descriptor per declared field, in declaration order, skipping
/// [`SYSTEM_FIELDS`].
pub fn default_fields(schema: &dyn SchemaDescriptor) -> Vec<FieldDescriptor> {
    schema
        .field_names()
        .into_iter()
        .filter(|name| !is_system_field(name))
        .map(|name| {
            let ty = schema.field_type(&name).unwrap_or_else(|| {
                debug!(field = %name, "Schema lists field without a type, classifying as string");
                PrimitiveType::String
            });
            FieldDescriptor::for_field(&name, &ty)
        })
        .collect()
}

pub fn is_system_field(field: &str) -> bool {
    SYSTEM_FIELDS.contains(&field)
}
