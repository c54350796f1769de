//! Password value object - one-way credential hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{ChatError, ChatResult};

/// Hashed credential. Holds only the argon2 PHC digest; the plaintext is
/// consumed at construction and never retained.
#[derive(Clone)]
pub struct Password {
    digest: String,
}

// Don't expose the digest in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("digest", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password.
    ///
    /// # Errors
    /// Returns a validation-class error for empty input. Length and charset
    /// policy live in the request validator, not here.
    pub fn new(plain_text: &str) -> ChatResult<Self> {
        if plain_text.is_empty() {
            return Err(ChatError::validation("Password must not be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| ChatError::server(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { digest })
    }

    /// Wrap an existing digest loaded from the store.
    pub fn from_digest(digest: String) -> Self {
        Self { digest }
    }

    /// Get the digest string for storage.
    pub fn as_str(&self) -> &str {
        &self.digest
    }

    /// Consume and return the digest string.
    pub fn into_string(self) -> String {
        self.digest
    }

    /// Verify a plaintext password against this digest.
    ///
    /// A malformed digest verifies as false rather than erroring; the caller
    /// cannot distinguish it from a mismatch, which is what authentication
    /// requires.
    pub fn verify(&self, plain_text: &str) -> bool {
        PasswordHash::new(&self.digest)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.digest
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let plain = "Secr3t!password";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_digest_never_equals_plaintext() {
        let plain = "pw12345!";
        let password = Password::new(plain).unwrap();
        assert_ne!(password.as_str(), plain);
    }

    #[test]
    fn test_from_digest_round_trip() {
        let plain = "TestPassword123";
        let password = Password::new(plain).unwrap();
        let digest = password.as_str().to_string();

        let restored = Password::from_digest(digest);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        // Different salts produce different digests
        assert_ne!(pass1.as_str(), pass2.as_str());
        // But both verify correctly
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = Password::new("");
        assert!(matches!(result, Err(ChatError::Validation(_))));
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        let password = Password::from_digest("not-a-phc-string".to_string());
        assert!(!password.verify("anything"));
    }
}
