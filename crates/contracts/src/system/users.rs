use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::metadata::ValidationRules;

/// Usernames and passwords are capped at this many characters
pub const CREDENTIAL_MAX_LENGTH: usize = 40;

const CREDENTIAL_RULES: ValidationRules = ValidationRules::required_max_length(CREDENTIAL_MAX_LENGTH);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserDto {
    pub username: String,
}

impl CreateUserDto {
    /// Checks both credentials; returns the first problem found
    pub fn validate(&self) -> Result<(), String> {
        CREDENTIAL_RULES.validate_string(&self.username, "Username")?;
        CREDENTIAL_RULES.validate_string(&self.password, "Password")?;
        Ok(())
    }
}

/// Usernames from the `GET /users` body.
///
/// The server answers with an object keyed by username; a plain array of
/// names is accepted too. Anything else yields an empty list.
pub fn usernames_from_value(value: &Value) -> Vec<String> {
    let mut names: Vec<String> = match value {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    names.sort();
    names
}
