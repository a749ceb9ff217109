//! Conversion of reported survey units into a reference amount

mod metadata;

pub use metadata::METADATA;
