//! Caller-supplied overrides.

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;
use viewdef_model::{PrimitiveType, SchemaDescriptor};

use crate::{FieldDescriptor, WidgetKind};

/// Where an action is rendered relative to the view body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
}

/// An action placed at the top or bottom of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
    pub placement: Placement,
    pub action: String,
}

impl ActionBinding {
    pub fn top(action: &str) -> Self {
        Self {
            placement: Placement::Top,
            action: action.into(),
        }
    }

    pub fn bottom(action: &str) -> Self {
        Self {
            placement: Placement::Bottom,
            action: action.into(),
        }
    }
}

/// Subtitle behaviour of a view.
///
/// JSON form: `true` (or absent) lets the renderer generate one, `false`
/// suppresses it, a string is used as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubTitleRepr", into = "SubTitleRepr")]
pub enum SubTitle {
    #[default]
    Generated,
    Text(String),
    Suppressed,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SubTitleRepr {
    Flag(bool),
    Text(String),
}

impl From<SubTitleRepr> for SubTitle {
    fn from(repr: SubTitleRepr) -> Self {
        match repr {
            SubTitleRepr::Flag(true) => Self::Generated,
            SubTitleRepr::Flag(false) => Self::Suppressed,
            SubTitleRepr::Text(text) => Self::Text(text),
        }
    }
}

impl From<SubTitle> for SubTitleRepr {
    fn from(sub_title: SubTitle) -> Self {
        match sub_title {
            SubTitle::Generated => Self::Flag(true),
            SubTitle::Suppressed => Self::Flag(false),
            SubTitle::Text(text) => Self::Text(text),
        }
    }
}

/// A field entry in `fields` or `add_opt`.
///
/// A bare identifier is classified from the schema. An object names the
/// field and overrides any subset of its descriptor; members left out are
/// classified from the schema as for a bare identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum FieldOption {
    Name(String),
    Spec(FieldSpec),
}

/// Partial descriptor for a single field. Only `field` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_kind: Option<WidgetKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl FieldSpec {
    /// Overlays the given members on `base`.
    fn apply(&self, base: FieldDescriptor) -> FieldDescriptor {
        FieldDescriptor {
            field: base.field,
            label: self.label.clone().unwrap_or(base.label),
            placeholder: self.placeholder.clone().unwrap_or(base.placeholder),
            widget_kind: self.widget_kind.clone().unwrap_or(base.widget_kind),
            length: self.length.unwrap_or(base.length),
            precision: self.precision.unwrap_or(base.precision),
            scale: self.scale.unwrap_or(base.scale),
        }
    }
}

impl Serialize for FieldOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Name(name) => name.serialize(serializer),
            Self::Spec(spec) => spec.serialize(serializer),
        }
    }
}

impl TryFrom<serde_json::Value> for FieldOption {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(name) => Ok(Self::Name(name)),
            value @ serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(Self::Spec)
                .map_err(|e| format!("invalid field entry: {e}")),
            other => Err(format!(
                "invalid field entry: expected a field name or an object, found {other}"
            )),
        }
    }
}

impl FieldOption {
    /// The field identifier this entry refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Spec(spec) => &spec.field,
        }
    }

    /// Builds the descriptor for this entry.
    ///
    /// Identifiers the schema does not declare are classified as `string`.
    pub fn to_descriptor(&self, schema: &dyn SchemaDescriptor) -> FieldDescriptor {
        let name = self.field();
        let ty = schema.field_type(name).unwrap_or_else(|| {
            debug!(field = %name, "Field not declared by schema, classifying as string");
            PrimitiveType::String
        });
        let base = FieldDescriptor::for_field(name, &ty);
        match self {
            Self::Name(_) => base,
            Self::Spec(spec) => spec.apply(base),
        }
    }
}

impl From<&str> for FieldOption {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<FieldDescriptor> for FieldOption {
    fn from(descriptor: FieldDescriptor) -> Self {
        Self::Spec(FieldSpec {
            field: descriptor.field,
            label: Some(descriptor.label),
            placeholder: Some(descriptor.placeholder),
            widget_kind: Some(descriptor.widget_kind),
            length: Some(descriptor.length),
            precision: Some(descriptor.precision),
            scale: Some(descriptor.scale),
        })
    }
}

/// Overrides a caller passes to [`crate::parse`].
///
/// Every member is optional. `Some`/non-empty members take precedence over
/// the resolver defaults; unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Replaces the action list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionBinding>>,
    /// Fields appended after the resolved list. Duplicates are skipped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_opt: Vec<FieldOption>,
    /// Actions appended after the resolved list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_actions: Vec<ActionBinding>,
    /// Replaces the default field list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field identifiers dropped from the resolved list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
    /// Action names dropped from the resolved list, at any placement.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<SubTitle>,
    /// Renderer template name, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ViewOptions {
    /// Parses an options document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
