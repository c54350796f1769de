//! Authentication handlers.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::SignupRequest;
use crate::errors::{ChatError, ChatResult};
use crate::services::{AuthenticateRequest, AuthenticateResponse, ValidateTokenServerResponse};

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/authenticate", post(authenticate))
        .route("/validate", get(validate_token))
}

/// Register a new user and return a session for it
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered and authenticated", body = AuthenticateResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> ChatResult<(StatusCode, Json<AuthenticateResponse>)> {
    let session = state.signup_service.signup(payload).await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Authenticate with username and password
#[utoipa::path(
    post,
    path = "/auth/authenticate",
    tag = "Authentication",
    request_body = AuthenticateRequest,
    responses(
        (status = 200, description = "Authentication successful", body = AuthenticateResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticateRequest>,
) -> ChatResult<Json<AuthenticateResponse>> {
    let session = state.auth_service.authenticate(payload).await?;

    Ok(Json(session))
}

/// Check an existing session token
#[utoipa::path(
    get,
    path = "/auth/validate",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = ValidateTokenServerResponse),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ChatResult<Json<ValidateTokenServerResponse>> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_TOKEN_PREFIX))
        .ok_or(ChatError::Unauthorized)?;

    let response = state.auth_service.validate_token(token)?;

    Ok(Json(response))
}
