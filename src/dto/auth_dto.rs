use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Register is sent as multipart (the resume rides along), so this struct
/// only carries the text fields for validation before the form is built.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3, message = "Password must be at least 3 characters"))]
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user_id: i64,
    pub role: Role,
}
