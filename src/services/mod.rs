//! Application services layer - the signup and authentication use cases.
//!
//! Services compose the domain and the user store behind trait seams so the
//! HTTP layer and tests depend on abstractions.

mod auth_service;
mod signup_service;
pub mod validation;

pub use auth_service::{
    AuthService, AuthenticateRequest, Authenticator, AuthenticateResponse, Claims, DeviceDetails,
    ValidateTokenServerResponse,
};
pub use signup_service::{Registrar, SignUpService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use signup_service::MockSignUpService;
