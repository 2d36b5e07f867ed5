//! Primitive type classification.
//!
//! Maps a [`PrimitiveType`] to the presentation hints a field of that type
//! gets by default. Classification is total: a type no rule matches lands in
//! the unmapped fallback, whose widget kind is the raw type tag.

use viewdef_model::PrimitiveType;

use crate::WidgetKind;

/// Placeholder shown for every numeric field.
pub const NUMBER_PLACEHOLDER: &str = "0";
/// Placeholder shown for date-time fields.
pub const DATETIME_PLACEHOLDER: &str = "yyyy/MM/dd HH:mm:ss";
/// Placeholder shown for time-of-day fields.
pub const TIME_PLACEHOLDER: &str = "HH:mm:ss";

/// Type-dependent presentation hints for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub widget_kind: WidgetKind,
    /// Maximum display/edit width. Always at least 1.
    pub length: u32,
    /// Total significant digits. Zero for non-numeric kinds.
    pub precision: u32,
    /// Digits after the decimal point. Zero for non-numeric kinds.
    pub scale: u32,
}

/// Coarse type category a classification rule assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Numeric,
    Text,
    DateTime,
    TimeOfDay,
    Uuid,
    Unmapped,
}

type Rule = (fn(&PrimitiveType) -> bool, Category);

// Evaluated top to bottom, first match wins. Unmapped is the fallback.
const RULES: &[Rule] = &[
    (is_numeric, Category::Numeric),
    (is_text, Category::Text),
    (is_datetime, Category::DateTime),
    (is_time_of_day, Category::TimeOfDay),
    (is_uuid, Category::Uuid),
];

fn is_numeric(ty: &PrimitiveType) -> bool {
    matches!(
        ty,
        PrimitiveType::Id | PrimitiveType::Integer | PrimitiveType::Float | PrimitiveType::Decimal
    )
}

fn is_text(ty: &PrimitiveType) -> bool {
    matches!(
        ty,
        PrimitiveType::String | PrimitiveType::Binary | PrimitiveType::BinaryId
    )
}

fn is_datetime(ty: &PrimitiveType) -> bool {
    matches!(
        ty,
        PrimitiveType::NaiveDatetime
            | PrimitiveType::NaiveDatetimeUsec
            | PrimitiveType::UtcDatetime
            | PrimitiveType::UtcDatetimeUsec
    )
}

fn is_time_of_day(ty: &PrimitiveType) -> bool {
    matches!(ty, PrimitiveType::Time | PrimitiveType::TimeUsec)
}

fn is_uuid(ty: &PrimitiveType) -> bool {
    matches!(ty, PrimitiveType::Uuid)
}

/// The category of `ty` under the ordered rule table.
pub fn category(ty: &PrimitiveType) -> Category {
    RULES
        .iter()
        .find(|(applies, _)| applies(ty))
        .map_or(Category::Unmapped, |(_, category)| *category)
}

/// Widget kind and numeric/length hints for `ty`.
pub fn classify(ty: &PrimitiveType) -> Classification {
    match category(ty) {
        Category::Numeric => {
            let fractional = matches!(ty, PrimitiveType::Float | PrimitiveType::Decimal);
            Classification {
                widget_kind: WidgetKind::Number,
                length: if fractional { 12 } else { 10 },
                precision: 10,
                scale: if fractional { 2 } else { 0 },
            }
        }
        Category::Text => plain(WidgetKind::Text, 255),
        Category::DateTime => plain(WidgetKind::DatetimeLocal, 20),
        Category::TimeOfDay => plain(WidgetKind::Time, 10),
        Category::Uuid => plain(WidgetKind::Text, 34),
        Category::Unmapped => plain(WidgetKind::Other(ty.as_str().to_string()), 50),
    }
}

fn plain(widget_kind: WidgetKind, length: u32) -> Classification {
    Classification {
        widget_kind,
        length,
        precision: 0,
        scale: 0,
    }
}

/// Placeholder text for `field` of type `ty`.
///
/// Numeric and temporal types get a format hint; everything else shows the
/// humanized field name.
pub fn placeholder(field: &str, ty: &PrimitiveType) -> String {
    match category(ty) {
        Category::Numeric => NUMBER_PLACEHOLDER.to_string(),
        Category::DateTime => DATETIME_PLACEHOLDER.to_string(),
        Category::TimeOfDay => TIME_PLACEHOLDER.to_string(),
        Category::Text | Category::Uuid | Category::Unmapped => humanize(field),
    }
}

/// Display label for a field: first letter upper-cased, underscores as
/// spaces. `None` yields an empty label.
pub fn label(field: Option<&str>) -> String {
    field.map(humanize).unwrap_or_default()
}

/// Title-cases an underscore-separated identifier.
///
/// Every segment gets an upper-case first letter and segments are joined
/// with single spaces: `"account_receivables"` becomes
/// `"Account Receivables"`. Empty segments are dropped.
pub fn capitalize(input: &str) -> String {
    input
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn humanize(field: &str) -> String {
    capitalize_first(field).replace('_', " ")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
