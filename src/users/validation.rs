use crate::error::AuthError;
use crate::users::dto::{LoginRequest, RegisterRequest};
use lazy_static::lazy_static;
use regex::Regex;

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn validate_register(payload: &RegisterRequest) -> Result<(), AuthError> {
    let name_len = payload.name.trim().chars().count();
    if !(2..=30).contains(&name_len) {
        return Err(AuthError::Validation {
            field: "name",
            message: "Name must be between 2 and 30 characters".into(),
        });
    }
    if !is_valid_email(&payload.email) {
        return Err(AuthError::Validation {
            field: "email",
            message: "Email is invalid".into(),
        });
    }
    let password_len = payload.password.chars().count();
    if !(6..=30).contains(&password_len) {
        return Err(AuthError::Validation {
            field: "password",
            message: "Password must be between 6 and 30 characters".into(),
        });
    }
    Ok(())
}

pub fn validate_login(payload: &LoginRequest) -> Result<(), AuthError> {
    if !is_valid_email(&payload.email) {
        return Err(AuthError::Validation {
            field: "email",
            message: "Email is invalid".into(),
        });
    }
    if payload.password.is_empty() {
        return Err(AuthError::Validation {
            field: "password",
            message: "Password field is required".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_well_formed_registration() {
        assert!(validate_register(&register("Ada", "ada@example.com", "hunter22")).is_ok());
    }

    #[test]
    fn rejects_short_name() {
        let err = validate_register(&register("A", "ada@example.com", "hunter22")).unwrap_err();
        assert!(matches!(err, AuthError::Validation { field: "name", .. }));
    }

    #[test]
    fn rejects_implausible_email() {
        let err = validate_register(&register("Ada", "not-an-email", "hunter22")).unwrap_err();
        assert!(matches!(err, AuthError::Validation { field: "email", .. }));
    }

    #[test]
    fn rejects_short_password() {
        let err = validate_register(&register("Ada", "ada@example.com", "abc")).unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation {
                field: "password",
                ..
            }
        ));
    }

    #[test]
    fn login_requires_password() {
        let err = validate_login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "".into(),
        })
        .unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation {
                field: "password",
                ..
            }
        ));
    }
}
