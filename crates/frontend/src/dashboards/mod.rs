pub mod d401_missing_data;

pub use d401_missing_data::ui::{HomeDashboard, StatusDashboard};
