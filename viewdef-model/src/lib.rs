//! Record schema model for viewdef.
//!
//! Defines the types the view resolver reads a record type through:
//! - [`SchemaDescriptor`] — the capability set: enumerate fields, look up a
//!   field's primitive type, report the storage identifier and type name
//! - [`PrimitiveType`] — the primitive type tag of a single field
//! - [`RecordSchema`] — a concrete, serde-backed descriptor for callers that
//!   load schemas from JSON rather than implementing the trait themselves
//!
//! Exclusion of system-managed fields is not done here. A descriptor reports
//! every declared field; the resolver decides what to hide.

mod descriptor;
mod primitive;
mod schema;

pub use descriptor::SchemaDescriptor;
pub use primitive::PrimitiveType;
pub use schema::{RecordSchema, SchemaField};
