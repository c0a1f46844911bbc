use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub name: String,               // display name
    pub email: String,              // unique natural key
    pub avatar: String,             // gravatar URL derived at registration
    #[serde(skip_serializing)]
    pub password_hash: String,      // bcrypt hash, not exposed in JSON
    pub created_at: OffsetDateTime, // creation timestamp
}
