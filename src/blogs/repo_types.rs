use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Blog post row; serialized as-is in the create response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub sub_title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub sub_title: String,
    pub content: String,
}
