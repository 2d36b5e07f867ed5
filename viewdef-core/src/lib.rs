//! Schema-driven view resolution.
//!
//! Turns a [`SchemaDescriptor`] and a set of caller overrides into a
//! [`ViewConfig`]: display name, title, source, an ordered list of
//! [`FieldDescriptor`]s and the action bindings. Three layers:
//! - [`classify`] — primitive type to widget kind, placeholder and
//!   length/precision/scale hints
//! - [`resolve`] — the default for each resolvable [`ConfigKey`]
//! - [`merge`] — the public [`parse`] entry point, folding caller
//!   [`ViewOptions`] over the defaults
//!
//! Everything here is synchronous and pure apart from `tracing` output.

pub mod classify;
mod config;
mod diagnostic;
mod error;
mod field;
pub mod merge;
mod options;
pub mod resolve;

pub use classify::{Classification, capitalize, classify, label, placeholder};
pub use config::{ConfigKey, ViewConfig};
pub use diagnostic::Diagnostic;
pub use error::{ResolveError, Result};
pub use field::{FieldDescriptor, WidgetKind};
pub use merge::{parse, parse_with_diagnostics};
pub use options::{ActionBinding, FieldOption, FieldSpec, Placement, SubTitle, ViewOptions};
pub use resolve::{DefaultValue, SYSTEM_FIELDS, default_value};

pub use viewdef_model::{PrimitiveType, RecordSchema, SchemaDescriptor, SchemaField};
