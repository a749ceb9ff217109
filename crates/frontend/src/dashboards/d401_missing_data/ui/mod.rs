mod home;
mod status;

pub use home::HomeDashboard;
pub use status::StatusDashboard;
