//! The credential surface: registration, login, and the token-gated
//! current-user lookup.

use crate::state::AppState;
use axum::Router;

mod dto;
pub mod gravatar;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;
pub(crate) mod repo_types;
mod validation;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
