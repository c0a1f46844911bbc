use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Public part of a freshly registered user, never the hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Response for the protected current-user lookup.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_serializes_success_and_bearer_token() {
        let response = LoginResponse {
            success: true,
            token: "Bearer abc.def.ghi".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains("Bearer abc.def.ghi"));
    }

    #[test]
    fn public_user_serializes_expected_fields() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            avatar: "https://www.gravatar.com/avatar/abc".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("ada@example.com"));
        assert!(json.contains("avatar"));
        assert!(!json.contains("password"));
    }
}
