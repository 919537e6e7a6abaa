use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::{NewUser, User};

/// Credential store.
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Insert a new user with an already hashed password.
    async fn create(&self, new: NewUser) -> anyhow::Result<User>;

    /// Find a user by email; the earliest registration wins if several share it.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserRepo {
    db: PgPool,
}

impl PgUserRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    async fn create(&self, new: NewUser) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.username)
        .bind(&new.email)
        .bind(&new.password_hash)
        .fetch_one(&self.db)
        .await
        .context("insert user")?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE email = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .context("find user by email")?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, username, email, password_hash, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find user by id")?;
        Ok(user)
    }
}
