use crate::PrimitiveType;

/// Read-only view of a record type's structure.
///
/// Implementors expose the declared fields in a stable order. The resolver
/// never mutates a descriptor and never caches anything across calls, so a
/// single descriptor may be shared freely between resolutions.
pub trait SchemaDescriptor {
    /// Fully qualified type name, e.g. `"MyApp.Billing.AccountReceivable"`.
    fn type_name(&self) -> &str;

    /// Storage identifier of the record type, e.g. `"account_receivables"`.
    fn source(&self) -> &str;

    /// Every declared field identifier, in declaration order.
    fn field_names(&self) -> Vec<String>;

    /// Primitive type of `field`, or `None` if the schema does not declare it.
    fn field_type(&self, field: &str) -> Option<PrimitiveType>;

    /// Last segment of [`type_name`](Self::type_name).
    ///
    /// Segments are separated by `::` or `.`, so both `my_app::Account` and
    /// `MyApp.Account` yield `"Account"`.
    fn type_segment(&self) -> &str {
        let name = self.type_name();
        name.rsplit("::")
            .next()
            .and_then(|s| s.rsplit('.').next())
            .unwrap_or(name)
    }
}

impl<T: SchemaDescriptor + ?Sized> SchemaDescriptor for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn source(&self) -> &str {
        (**self).source()
    }

    fn field_names(&self) -> Vec<String> {
        (**self).field_names()
    }

    fn field_type(&self, field: &str) -> Option<PrimitiveType> {
        (**self).field_type(field)
    }
}
