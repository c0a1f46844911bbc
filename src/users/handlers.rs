use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::{
    error::AuthError,
    state::AppState,
    users::{
        dto::{CurrentUserResponse, LoginRequest, LoginResponse, PublicUser, RegisterRequest},
        gravatar::gravatar_url,
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo_types::User,
        validation,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/test", get(test))
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/current", get(current_user))
}

async fn test() -> Json<serde_json::Value> {
    Json(json!({ "msg": "Users works" }))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<PublicUser>, AuthError> {
    payload.email = payload.email.trim().to_lowercase();
    validation::validate_register(&payload)?;

    // Common-case pre-check; the unique index on email closes the race
    // between two concurrent registrations (see User::create).
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AuthError::EmailTaken);
    }

    let avatar = gravatar_url(&payload.email);

    // bcrypt is CPU-heavy; keep it off the async runtime
    let cost = state.config.bcrypt_cost;
    let password = payload.password.clone();
    let hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))??;

    let user = User::create(&state.db, payload.name.trim(), &payload.email, &avatar, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(PublicUser {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    payload.email = payload.email.trim().to_lowercase();
    validation::validate_login(&payload)?;

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(AuthError::UserNotFound);
        }
    };

    let password = payload.password.clone();
    let stored = user.password_hash.clone();
    let ok = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))??;

    if !ok {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(AuthError::PasswordIncorrect);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        token: format!("Bearer {token}"),
    }))
}

#[instrument(skip(state))]
pub async fn current_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<CurrentUserResponse>, AuthError> {
    // No delete path exists, so a verified claim should always resolve
    let user = User::find_by_id(&state.db, claims.id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    Ok(Json(CurrentUserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}
