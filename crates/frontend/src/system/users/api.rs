use contracts::shared::api_error::ApiError;
use contracts::system::users::{usernames_from_value, CreateUserDto, DeleteUserDto};
use serde_json::Value;

use crate::shared::api_utils::{delete_json, get_json, post_json};

/// Fetch all usernames
pub async fn fetch_users() -> Result<Vec<String>, ApiError> {
    let body = get_json::<Value>("/users").await?;
    Ok(usernames_from_value(&body))
}

/// Create new user
pub async fn create_user(dto: &CreateUserDto) -> Result<(), ApiError> {
    post_json("/users", dto).await
}

/// Delete user by name
pub async fn delete_user(username: String) -> Result<(), ApiError> {
    delete_json("/users", &DeleteUserDto { username }).await
}
