//! Country query handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
// axum-extra's Query supports repeated keys (?region=A&region=B),
// which axum's stock Query rejects for Vec fields.
use axum_extra::extract::Query;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::domain::Country;
use crate::errors::AppResult;

/// Region filter for the country listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct CountriesQuery {
    /// Regions to filter by; repeatable. No values means all countries.
    #[serde(default)]
    pub region: Vec<String>,
}

/// Create country routes
pub fn country_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_countries))
        .route("/:alpha2", get(get_country))
}

/// List countries, optionally filtered by region
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = "Countries",
    params(CountriesQuery),
    responses(
        (status = 200, description = "Matching countries in table order", body = [Country]),
        (status = 400, description = "No countries matched")
    )
)]
pub async fn list_countries(
    State(state): State<AppState>,
    Query(query): Query<CountriesQuery>,
) -> AppResult<Json<Vec<Country>>> {
    let countries = state.country_service.list(&query.region).await?;

    Ok(Json(countries))
}

/// Get a single country by alpha2 code
#[utoipa::path(
    get,
    path = "/api/countries/{alpha2}",
    tag = "Countries",
    params(
        ("alpha2" = String, Path, description = "ISO alpha-2 country code")
    ),
    responses(
        (status = 200, description = "Country found", body = Country),
        (status = 404, description = "No country with this code")
    )
)]
pub async fn get_country(
    State(state): State<AppState>,
    Path(alpha2): Path<String>,
) -> AppResult<Json<Country>> {
    let country = state.country_service.get(&alpha2).await?;

    Ok(Json(country))
}
