//! Metadata types describing the managed resource tables
//!
//! Every resource screen is rendered from one `ResourceMetadata` constant:
//! columns, form inputs, validation, search fields, endpoints and the
//! natural key all come from here.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::ResourceKind;
//!
//! let meta = ResourceKind::Fertilizer.metadata();
//! for field in meta.form_fields() {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldType;
pub use types::{
    Endpoints, FieldMetadata, FieldUiMetadata, NaturalKey, ResourceMetadata, ResourceUiMetadata,
};
pub use validation::ValidationRules;
