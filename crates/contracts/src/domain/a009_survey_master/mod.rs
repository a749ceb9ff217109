//! Survey master records: one row per origin, year, coffee type and supply chain

mod metadata;

pub use metadata::METADATA;
