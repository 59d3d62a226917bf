//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, country_handler};
use crate::domain::{Country, Profile, RegisterUser};

/// OpenAPI documentation for the Atlas API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atlas API",
        version = "0.1.0",
        description = "Country reference data and user registration over Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:57424", description = "Local development server")
    ),
    paths(
        // Country endpoints
        country_handler::list_countries,
        country_handler::get_country,
        // Registration endpoint
        auth_handler::register,
    ),
    components(
        schemas(
            Country,
            RegisterUser,
            Profile,
            auth_handler::RegisterResponse,
        )
    ),
    tags(
        (name = "Countries", description = "Country reference data lookups"),
        (name = "Registration", description = "User registration")
    )
)]
pub struct ApiDoc;
