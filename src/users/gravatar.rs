use md5::{Digest, Md5};

/// Derive a gravatar URL from an email address.
///
/// Pure and deterministic: the trimmed, lowercased email is MD5-hashed
/// into the URL path. Fixed policy parameters: 200px, PG rating,
/// mystery-person placeholder when no gravatar exists.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm",
        hex::encode(digest)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_embeds_md5_of_email() {
        assert_eq!(
            gravatar_url("a@x.com"),
            "https://www.gravatar.com/avatar/743173788aa9166801df2e18f0e7ff24?s=200&r=pg&d=mm"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = gravatar_url("test@example.com");
        let second = gravatar_url("test@example.com");
        assert_eq!(first, second);
    }

    #[test]
    fn email_is_normalized_before_hashing() {
        assert_eq!(
            gravatar_url("  Test@Example.COM  "),
            gravatar_url("test@example.com")
        );
        assert!(gravatar_url("test@example.com")
            .contains("55502f40dc8b7c769880b10874abc9d0"));
    }
}
