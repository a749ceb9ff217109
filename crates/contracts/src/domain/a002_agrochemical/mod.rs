//! Agrochemical reference data (type and active ingredient per reported name)

mod metadata;

pub use metadata::{AGROCHEMICAL_TYPES, METADATA};
