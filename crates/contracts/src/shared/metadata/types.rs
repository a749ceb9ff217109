//! Core metadata types for resource tables
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldType;
use super::validation::ValidationRules;

// ============================================================================
// Resource-level metadata
// ============================================================================

/// Metadata for one managed resource kind (one table screen)
/// All string fields are 'static for zero-cost compile-time access
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceMetadata {
    /// Stable key, used for tab keys and page ids
    pub key: &'static str,
    /// Server-side table name as reported by `/status`
    pub table_name: &'static str,
    pub ui: ResourceUiMetadata,
    pub endpoints: Endpoints,
    pub fields: &'static [FieldMetadata],
    pub natural_key: NaturalKey,
}

impl ResourceMetadata {
    pub fn field(&self, name: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields shown as table columns
    pub fn list_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.ui.visible_in_list)
    }

    /// Fields rendered in the add/update form
    pub fn form_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.ui.visible_in_form)
    }

    /// Names of the fields the search box matches against
    pub fn search_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.searchable)
            .map(|f| f.name)
            .collect()
    }
}

/// UI metadata for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceUiMetadata {
    /// Singular, capitalized: "Fertilizer cost"
    pub element_name: &'static str,
    /// Plural, capitalized: "Fertilizer costs"
    pub list_name: &'static str,
    /// Screen title: "Fertilizer Cost Data"
    pub title: &'static str,
    pub icon: Option<&'static str>,
}

/// Server paths for the five resource operations (leading slash, no origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub list: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub ingest: &'static str,
}

/// How a record is addressed for update/delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalKey {
    /// The value of a single record field
    Field(&'static str),
    /// A server-derived key: `target` if the record carries it, otherwise
    /// the `parts` values joined by `_`
    Composite {
        target: &'static str,
        parts: &'static [&'static str],
    },
}

impl NaturalKey {
    /// Name of the JSON property sent in the delete body
    pub fn target(&self) -> &'static str {
        match self {
            Self::Field(name) => name,
            Self::Composite { target, .. } => target,
        }
    }

    /// Whether `field` contributes to the key
    pub fn involves(&self, field: &str) -> bool {
        match self {
            Self::Field(name) => *name == field,
            Self::Composite { parts, .. } => parts.contains(&field),
        }
    }
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// Matched by the table search box
    pub searchable: bool,
    pub enum_values: Option<&'static [&'static str]>,
}

impl FieldMetadata {
    /// Plain optional text field with default UI settings
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Text,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::none(),
            searchable: false,
            enum_values: None,
        }
    }

    /// Optional numeric field
    pub const fn number(name: &'static str, label: &'static str, step: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Number { step },
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::non_negative(),
            searchable: false,
            enum_values: None,
        }
    }

    /// Required closed-choice field
    pub const fn choice(
        name: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            field_type: FieldType::Choice,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::required(),
            searchable: false,
            enum_values: Some(values),
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}
