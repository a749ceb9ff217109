//! Daily laborer cost per activity, survey origin and year

mod metadata;

pub use metadata::METADATA;
