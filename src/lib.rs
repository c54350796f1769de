//! Relay Auth - registration and authentication for the Relay chat platform
//!
//! The core is the signup pipeline: validate a registration request, hash the
//! credential, persist the identity exactly once, then authenticate it and
//! hand back a session.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User identity, credential hashing, avatar selection
//! - **services**: Signup orchestration, validation, authentication
//! - **infra**: Database and the user store adapter
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, SignupRequest, User};
pub use errors::{ChatError, ChatResult, ResponseStatus};
