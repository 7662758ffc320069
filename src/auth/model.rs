use serde::{Deserialize, Serialize};

use crate::store::UserPublic;

// Absent fields deserialize to empty strings so the handlers can answer
// missing and empty input with the same validation error.
#[derive(Debug, Deserialize)]
pub struct RegisterUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserPublic,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserPublic,
}
