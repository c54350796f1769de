//! Authentication service - credential verification and session minting.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::Password;
use crate::errors::{ChatError, ChatResult, ResponseStatus};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Optional client device information attached to an authentication attempt.
/// Logged for auditing; carries no pipeline semantics.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DeviceDetails {
    pub user_agent: Option<String>,
    pub platform: Option<String>,
}

/// Credentials presented for authentication. Transient, never persisted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AuthenticateRequest {
    #[schema(example = "carol")]
    pub username: String,
    #[schema(example = "pw12345!")]
    pub password: String,
    pub device_details: Option<DeviceDetails>,
}

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    /// Session id, fresh per issued token
    pub sid: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Session returned after successful authentication
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticateResponse {
    pub user_id: Uuid,
    pub session_id: Uuid,
    /// Signed session token
    pub token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Outcome of checking an existing session token (read path, not signup).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidateTokenServerResponse {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub message: String,
    pub status: ResponseStatus,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and mint a session
    async fn authenticate(&self, request: AuthenticateRequest) -> ChatResult<AuthenticateResponse>;

    /// Check an existing session token
    fn validate_token(&self, token: &str) -> ChatResult<ValidateTokenServerResponse>;
}

/// Mint a session token for a verified identity (shared helper)
fn generate_token(
    user_id: Uuid,
    username: &str,
    config: &Config,
) -> ChatResult<AuthenticateResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.token_expiration_hours);
    let session_id = Uuid::new_v4();

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        sid: session_id,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.token_secret_bytes()),
    )?;

    Ok(AuthenticateResponse {
        user_id,
        session_id,
        token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.token_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Decode and validate a session token (shared helper)
fn decode_token(token: &str, config: &Config) -> ChatResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.token_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService backed by the user store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate(&self, request: AuthenticateRequest) -> ChatResult<AuthenticateResponse> {
        let username = request.username.to_lowercase();
        let user = self.users.find_full_details_by_username(&username).await?;

        // SECURITY: Perform password verification even if the user doesn't
        // exist, so missing-user and wrong-password take comparable time and
        // usernames cannot be enumerated.
        let dummy_digest =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let stored_digest = user
            .as_ref()
            .map(|u| u.password_digest.clone())
            .unwrap_or_else(|| dummy_digest.to_string());

        let password_valid = Password::from_digest(stored_digest).verify(&request.password);

        // The externally visible error is identical for both failure causes
        let Some(user) = user.filter(|_| password_valid) else {
            return Err(ChatError::InvalidCredentials);
        };

        if let Some(device) = &request.device_details {
            tracing::debug!(user_id = %user.id, ?device, "authenticated from device");
        }

        generate_token(user.id, &user.username, &self.config)
    }

    fn validate_token(&self, token: &str) -> ChatResult<ValidateTokenServerResponse> {
        let claims = decode_token(token, &self.config)?;

        Ok(ValidateTokenServerResponse {
            user_id: claims.sub,
            session_id: claims.sid,
            message: "Token is valid".to_string(),
            status: ResponseStatus::Success,
        })
    }
}
