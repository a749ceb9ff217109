//! Agrochemical prices reported per survey origin and year

mod metadata;

pub use metadata::METADATA;
