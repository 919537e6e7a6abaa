use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, MessageResponse, ProfileResponse, SignupRequest},
        jwt::AuthUser,
        services,
    },
    error::ApiResult,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(profile))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    services::signup(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully",
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let token = services::login(&state, payload).await?;
    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
    }))
}

#[instrument(skip(state, user), fields(user_id = %user.id, email = %user.email))]
pub async fn profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(services::profile(&state, user.id).await?))
}
