use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;

/// Everything that can go wrong on the credential surface.
///
/// Client-facing rejections carry a field-keyed message; `Hashing`,
/// `Signing` and `Database` are server faults and never leak detail
/// to the caller. Token verification failures are collapsed to a bare
/// 401 by the access guard.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already exists")]
    EmailTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Password incorrect")]
    PasswordIncorrect,
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn field_body(field: &str, message: &str) -> Value {
    let mut body = Map::new();
    body.insert(field.to_string(), Value::String(message.to_string()));
    Value::Object(body)
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(field_body("email", "Email already exists")),
            )
                .into_response(),
            AuthError::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(field_body("email", "User not found")),
            )
                .into_response(),
            AuthError::PasswordIncorrect => (
                StatusCode::BAD_REQUEST,
                Json(field_body("password", "Password incorrect")),
            )
                .into_response(),
            AuthError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, Json(field_body(field, message))).into_response()
            }
            AuthError::InvalidSignature | AuthError::Expired | AuthError::Malformed => {
                StatusCode::UNAUTHORIZED.into_response()
            }
            AuthError::Hashing(_) | AuthError::Signing(_) | AuthError::Database(_) => {
                error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(field_body("error", "Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AuthError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    #[tokio::test]
    async fn email_taken_is_field_keyed_400() {
        let (status, body) = body_json(AuthError::EmailTaken).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["email"], "Email already exists");
    }

    #[tokio::test]
    async fn user_not_found_is_field_keyed_404() {
        let (status, body) = body_json(AuthError::UserNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["email"], "User not found");
    }

    #[tokio::test]
    async fn password_incorrect_is_field_keyed_400() {
        let (status, body) = body_json(AuthError::PasswordIncorrect).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["password"], "Password incorrect");
    }

    #[tokio::test]
    async fn token_failures_collapse_to_bare_401() {
        for err in [
            AuthError::Expired,
            AuthError::InvalidSignature,
            AuthError::Malformed,
        ] {
            let (status, body) = body_json(err).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, Value::Null);
        }
    }

    #[tokio::test]
    async fn server_faults_hide_detail() {
        let (status, body) = body_json(AuthError::Hashing("entropy failure".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
