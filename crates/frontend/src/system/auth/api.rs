use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, MessageResponse, SessionInfo};

use crate::shared::api_utils::{get_json, post_json, post_json_for};

/// Login with username and password; the server answers with a session cookie
pub async fn login(username: String, password: String) -> Result<MessageResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_json_for("/login", &request).await
}

/// End the server session
pub async fn logout() -> Result<(), ApiError> {
    post_json("/logout", &serde_json::json!({})).await
}

/// Who the current cookie belongs to; `None` when there is no valid session
pub async fn current_session() -> Result<Option<SessionInfo>, ApiError> {
    match get_json::<SessionInfo>("/session").await {
        Ok(info) => Ok(Some(info)),
        Err(ApiError::Unauthorized) => Ok(None),
        Err(e) => Err(e),
    }
}
