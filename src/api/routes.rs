//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, country_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/api/ping", get(ping))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Country reference data
        .nest("/api/countries", country_routes())
        // Registration
        .nest("/api/auth", auth_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct PingResponse {
    status: &'static str,
}

/// Health check endpoint. Fixed payload, no side effects.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { status: "ok" })
}
