use serde::{Deserialize, Serialize};

/// Request body for signup. Missing fields deserialize empty and are rejected later.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

/// Public part of the user returned by `/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
}
