//! Application state - explicit construction of the service graph.
//!
//! Collaborators are built once at startup and handed to the handlers by
//! reference counting; no runtime service locator.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserRepository, UserStore};
use crate::services::{AuthService, Authenticator, Registrar, SignUpService};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    /// Signup orchestrator
    pub signup_service: Arc<dyn SignUpService>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the full service graph from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        let auth_service: Arc<dyn AuthService> =
            Arc::new(Authenticator::new(users.clone(), config));
        let signup_service: Arc<dyn SignUpService> =
            Arc::new(Registrar::new(users, auth_service.clone()));

        Self {
            signup_service,
            auth_service,
            database,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        signup_service: Arc<dyn SignUpService>,
        auth_service: Arc<dyn AuthService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            signup_service,
            auth_service,
            database,
        }
    }
}
