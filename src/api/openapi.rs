//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::auth_handler;
use crate::domain::{ContactType, SignupRequest};
use crate::errors::ResponseStatus;
use crate::services::{
    AuthenticateRequest, AuthenticateResponse, DeviceDetails, ValidateTokenServerResponse,
};

/// OpenAPI documentation for Relay Auth
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Relay Auth",
        version = "0.1.0",
        description = "Registration and authentication service for the Relay chat platform",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::signup,
        auth_handler::authenticate,
        auth_handler::validate_token,
    ),
    components(
        schemas(
            SignupRequest,
            ContactType,
            AuthenticateRequest,
            DeviceDetails,
            AuthenticateResponse,
            ValidateTokenServerResponse,
            ResponseStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration, login and token validation")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for Bearer session tokens
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token obtained from /auth/authenticate"))
                        .build(),
                ),
            );
        }
    }
}
