//! Signup orchestrator - the end-to-end registration pipeline.
//!
//! validate -> hash -> build identity -> persist -> re-authenticate.
//! Strictly linear and single-pass: every step either feeds the next or
//! short-circuits with a classified error, and nothing is retried or rolled
//! back at this layer.

use async_trait::async_trait;
use std::sync::Arc;

use super::auth_service::{AuthService, AuthenticateRequest, AuthenticateResponse};
use super::validation;
use crate::domain::{avatar, Password, SignupRequest, User};
use crate::errors::{ChatError, ChatResult};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Signup service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SignUpService: Send + Sync {
    /// Register a new user and immediately authenticate it.
    ///
    /// Returns the session for the freshly created identity, or exactly one
    /// classified error.
    async fn signup(&self, request: SignupRequest) -> ChatResult<AuthenticateResponse>;
}

/// Concrete signup orchestrator over its collaborator interfaces.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
    auth: Arc<dyn AuthService>,
}

impl Registrar {
    /// Create a new signup orchestrator
    pub fn new(users: Arc<dyn UserRepository>, auth: Arc<dyn AuthService>) -> Self {
        Self { users, auth }
    }
}

#[async_trait]
impl SignUpService for Registrar {
    async fn signup(&self, request: SignupRequest) -> ChatResult<AuthenticateResponse> {
        // Gate: no hashing and no store traffic for malformed input
        validation::validate_signup(&request)?;

        let digest = Password::new(&request.password)?.into_string();

        let user = User::new(
            &request.username,
            digest,
            request.name.clone(),
            avatar::pick_default(),
        );

        // Friendly duplicate check on the common path. The unique index on
        // the store remains the authoritative guard; a race that slips past
        // this query still surfaces as a conflict from `create`.
        let duplicates = self
            .users
            .find_by_username_or_email(user.email.as_deref(), &user.username)
            .await?;
        if !duplicates.is_empty() {
            return Err(ChatError::conflict("Username already taken"));
        }

        let created = self.users.create(user).await?;
        tracing::info!(user_id = %created.id, username = %created.username, "user registered");

        // Re-authenticate with the stored (normalized) username and the
        // original plaintext. If this fails the row stays; the caller gets an
        // authentication error and retries login separately.
        let authenticate = AuthenticateRequest {
            username: created.username,
            password: request.password,
            device_details: None,
        };

        self.auth.authenticate(authenticate).await
    }
}
