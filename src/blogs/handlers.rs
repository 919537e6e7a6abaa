use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{BlogSummary, CreateBlogRequest, CreatedBlogResponse},
    services,
};
use crate::{auth::jwt::AuthUser, error::ApiResult, state::AppState};

pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/create-blog", post(create_blog))
        .route("/blog-display", get(list_blogs))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id, email = %user.email))]
pub async fn create_blog(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedBlogResponse>)> {
    let Json(payload) = payload?;
    let blog = services::create_blog(&state, user.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedBlogResponse {
            message: "Blog created successfully",
            blog,
        }),
    ))
}

#[instrument(skip(state, user), fields(user_id = %user.id, email = %user.email))]
pub async fn list_blogs(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<BlogSummary>>> {
    Ok(Json(services::list_blogs(&state, user.id).await?))
}
