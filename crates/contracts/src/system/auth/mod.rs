use serde::{Deserialize, Serialize};

use crate::shared::api_error::ApiError;

/// The only account the server treats as administrator
pub const ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Who the session cookie belongs to, as reported by `GET /session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl SessionInfo {
    /// Session of a user who has just logged in, for servers without `GET /session`
    pub fn from_login(username: &str) -> Self {
        Self {
            username: username.to_string(),
            is_admin: username == ADMIN_USERNAME,
        }
    }
}

/// Server has no session endpoint (older deployments answer 404 or 405)
pub fn is_session_endpoint_missing(err: &ApiError) -> bool {
    matches!(err, ApiError::Status(404 | 405))
}

/// Turns the session check that follows a successful `POST /login` into
/// the signed-in session, or the message shown on the login page
pub fn session_after_login(
    username: &str,
    check: Result<Option<SessionInfo>, ApiError>,
) -> Result<SessionInfo, String> {
    match check {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err("Login succeeded but the session cookie was rejected".to_string()),
        Err(e) if is_session_endpoint_missing(&e) => Ok(SessionInfo::from_login(username)),
        Err(e) => Err(format!("Could not verify the session: {}", e)),
    }
}

/// `{"message": "..."}` body returned by the auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
