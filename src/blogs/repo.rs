use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Blog, NewBlog};

#[async_trait]
pub trait BlogRepo: Send + Sync {
    async fn create(&self, user_id: Uuid, new: NewBlog) -> anyhow::Result<Blog>;

    /// All posts owned by `user_id`, oldest first.
    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Blog>>;
}

#[derive(Clone)]
pub struct PgBlogRepo {
    db: PgPool,
}

impl PgBlogRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepo for PgBlogRepo {
    async fn create(&self, user_id: Uuid, new: NewBlog) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (id, user_id, title, sub_title, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, sub_title, content, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.sub_title)
        .bind(&new.content)
        .fetch_one(&self.db)
        .await
        .context("insert blog")?;
        Ok(blog)
    }

    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Blog>> {
        let rows = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, user_id, title, sub_title, content, created_at
            FROM blogs
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .context("list blogs by user")?;
        Ok(rows)
    }
}
