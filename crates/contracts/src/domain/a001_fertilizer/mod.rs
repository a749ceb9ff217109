//! Fertilizer reference data (nutrient content and type per reported name)

mod metadata;

pub use metadata::{FERTILIZER_TYPES, METADATA};
