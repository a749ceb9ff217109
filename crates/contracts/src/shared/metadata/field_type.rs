//! Field type enumeration for metadata system

/// Input semantics of a resource field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    /// Free text, sent as a JSON string
    #[default]
    Text,
    /// Numeric input; `step` is forwarded to the `<input type="number">` element
    Number { step: &'static str },
    /// Closed list of values (see `FieldMetadata::enum_values`), empty string = not chosen
    Choice,
}
