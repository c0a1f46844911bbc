use crate::error::AuthError;
use crate::users::repo_types::User;
use sqlx::PgPool;
use uuid::Uuid;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, avatar, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, avatar, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password.
    ///
    /// Uniqueness is guaranteed by the unique index on `email`; a
    /// violation surfaces as `EmailTaken` so two racing registrations
    /// cannot both succeed even when both passed the pre-check.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        avatar: &str,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, avatar, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, avatar, password_hash, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(avatar)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AuthError::EmailTaken,
            _ => AuthError::Database(e),
        })
    }
}
