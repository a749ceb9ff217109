//! Missing-data counters shown on the home and status dashboards

mod dto;

pub use dto::{MissingDataStatus, RealTimeInfo, StatusEntry, TableMissing};
