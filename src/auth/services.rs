use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{LoginRequest, ProfileResponse, SignupRequest},
        password::{hash_password, verify_password},
        repo_types::{NewUser, User},
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

const SIGNUP_FAILED: &str = "Error registering user";
const LOGIN_FAILED: &str = "Internal server error";
const PROFILE_FAILED: &str = "Error fetching profile data";

pub async fn signup(state: &AppState, req: SignupRequest) -> ApiResult<User> {
    if req.username.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::validation(
            "Username, email and password are required",
        ));
    }

    if state.config.unique_emails {
        let existing = state
            .users
            .find_by_email(&req.email)
            .await
            .map_err(|e| ApiError::internal(SIGNUP_FAILED, e))?;
        if existing.is_some() {
            warn!(email = %req.email, "email already registered");
            return Err(ApiError::EmailTaken);
        }
    }

    let password_hash = hash_password(req.password)
        .await
        .map_err(|e| ApiError::internal(SIGNUP_FAILED, e))?;

    let user = state
        .users
        .create(NewUser {
            username: req.username,
            email: req.email,
            password_hash,
        })
        .await
        .map_err(|e| ApiError::internal(SIGNUP_FAILED, e))?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Checks credentials and returns a freshly signed session token.
pub async fn login(state: &AppState, req: LoginRequest) -> ApiResult<String> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let user = state
        .users
        .find_by_email(&req.email)
        .await
        .map_err(|e| ApiError::internal(LOGIN_FAILED, e))?
        .ok_or_else(|| {
            warn!(email = %req.email, "login unknown email");
            ApiError::UserNotFound
        })?;

    let ok = verify_password(req.password, user.password_hash.clone())
        .await
        .map_err(|e| ApiError::internal(LOGIN_FAILED, e))?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .keys
        .sign(user.id, &user.email)
        .map_err(|e| ApiError::internal(LOGIN_FAILED, e))?;

    info!(user_id = %user.id, "user logged in");
    Ok(token)
}

pub async fn profile(state: &AppState, user_id: Uuid) -> ApiResult<ProfileResponse> {
    let user = state
        .users
        .find_by_id(user_id)
        .await
        .map_err(|e| ApiError::internal(PROFILE_FAILED, e))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ProfileResponse {
        username: user.username,
        email: user.email,
    })
}
