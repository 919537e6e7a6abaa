use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub username: String,           // display name
    pub email: String,              // login identifier
    pub password_hash: String,      // Argon2 PHC string, never returned to clients
    pub created_at: OffsetDateTime, // creation timestamp
}

/// Fields of a user about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
