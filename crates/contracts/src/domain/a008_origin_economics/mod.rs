//! Living income benchmark and exchange rate per survey origin and year

mod metadata;

pub use metadata::METADATA;
