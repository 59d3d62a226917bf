//! Registration handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Profile, RegisterUser};
use crate::errors::AppResult;

/// Successful registration response: `{"profile": ...}`
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Public profile of the created user
    pub profile: Profile,
}

/// Create registration routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Registration",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Login or email already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterUser>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let profile = state.registration_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { profile })))
}
