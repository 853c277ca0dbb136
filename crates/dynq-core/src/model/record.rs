use crate::model::{FieldClass, FieldModel};
use std::fmt;

///
/// RecordModel
/// Static runtime model for one record type: the field-descriptor table the
/// compilers resolve names against instead of runtime introspection.
///

pub struct RecordModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name used in error messages.
    pub record_name: &'static str,
    /// Field used for the default ordering when a sort spec is empty.
    pub primary_key: &'static str,
    /// Ordered field list (authoritative for resolution and projection).
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    /// Look up one field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields carrying a quick-search marker, in declaration order.
    pub fn quick_search_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.fields.iter().filter(|field| field.quick_search.is_some())
    }

    /// Names of the scalar fields, the default projection when a caller
    /// requests no fields.
    #[must_use]
    pub fn default_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| field.kind.class() == FieldClass::Scalar)
            .map(|field| field.name.to_string())
            .collect()
    }
}

impl fmt::Debug for RecordModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Models can reference each other; print identity only.
        f.debug_struct("RecordModel")
            .field("record_name", &self.record_name)
            .field("fields", &self.fields.len())
            .finish()
    }
}
