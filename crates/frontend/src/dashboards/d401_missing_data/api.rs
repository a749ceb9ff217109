use contracts::dashboards::d401_missing_data::{MissingDataStatus, RealTimeInfo};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

/// Missing-value counts per server table
pub async fn get_status() -> Result<MissingDataStatus, ApiError> {
    get_json("/status").await
}

/// Overall missing-data summary
pub async fn get_real_time_info() -> Result<RealTimeInfo, ApiError> {
    get_json("/real_time_info").await
}
