//! Integration tests for API endpoints.
//!
//! These tests wire stub services into the router and drive it with
//! `tower::ServiceExt::oneshot`, checking status codes and payload
//! shapes without a database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use atlas_api::api::{create_router, AppState};
use atlas_api::domain::{Country, Profile, RegisterUser};
use atlas_api::errors::{AppError, AppResult};
use atlas_api::services::{CountryService, RegistrationService};

// =============================================================================
// Stub Services
// =============================================================================

/// Country service over a fixed in-memory table
struct StubCountryService {
    countries: Vec<Country>,
}

impl StubCountryService {
    fn with_reference_data() -> Self {
        Self {
            countries: vec![
                country("Netherlands", "NL", "NLD", "Europe"),
                country("Japan", "JP", "JPN", "Asia"),
                country("Brazil", "BR", "BRA", "Americas"),
            ],
        }
    }
}

#[async_trait]
impl CountryService for StubCountryService {
    async fn list(&self, regions: &[String]) -> AppResult<Vec<Country>> {
        let matching: Vec<Country> = self
            .countries
            .iter()
            .filter(|c| regions.is_empty() || regions.contains(&c.region))
            .cloned()
            .collect();

        if matching.is_empty() {
            return Err(AppError::validation("not found"));
        }

        Ok(matching)
    }

    async fn get(&self, alpha2: &str) -> AppResult<Country> {
        self.countries
            .iter()
            .find(|c| c.alpha2 == alpha2)
            .cloned()
            .ok_or(AppError::NotFound)
    }
}

/// Registration service that echoes the request into a profile;
/// one email is already taken
struct StubRegistrationService;

const TAKEN_EMAIL: &str = "taken@example.com";

#[async_trait]
impl RegistrationService for StubRegistrationService {
    async fn register(&self, request: RegisterUser) -> AppResult<Profile> {
        if request.login.is_empty() || request.email.is_empty() {
            return Err(AppError::validation("missing data"));
        }
        if request.email == TAKEN_EMAIL {
            return Err(AppError::conflict("not uniq email"));
        }

        Ok(Profile {
            login: request.login,
            email: request.email,
            country_code: request.country_code,
            is_public: request.is_public,
            phone: request.phone,
        })
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn country(name: &str, alpha2: &str, alpha3: &str, region: &str) -> Country {
    Country {
        name: name.to_string(),
        alpha2: alpha2.to_string(),
        alpha3: alpha3.to_string(),
        region: region.to_string(),
    }
}

fn test_app() -> axum::Router {
    let state = AppState::new(
        Arc::new(StubRegistrationService),
        Arc::new(StubCountryService::with_reference_data()),
    );
    create_router(state)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_ping_returns_ok_payload() {
    let response = test_app().oneshot(get("/api/ping")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

// =============================================================================
// Countries
// =============================================================================

#[tokio::test]
async fn test_list_countries_returns_full_table() {
    let response = test_app().oneshot(get("/api/countries")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let countries = body.as_array().unwrap();
    assert_eq!(countries.len(), 3);
    assert_eq!(
        countries[0],
        json!({
            "name": "Netherlands",
            "alpha2": "NL",
            "alpha3": "NLD",
            "region": "Europe"
        })
    );
}

#[tokio::test]
async fn test_list_countries_with_repeated_region_params() {
    let response = test_app()
        .oneshot(get("/api/countries?region=Europe&region=Asia"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let regions: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["region"].as_str().unwrap())
        .collect();
    assert_eq!(regions, ["Europe", "Asia"]);
}

#[tokio::test]
async fn test_list_countries_unmatched_region_is_bad_request() {
    let response = test_app()
        .oneshot(get("/api/countries?region=Atlantis"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({"reason": "not found"}));
}

#[tokio::test]
async fn test_get_country_by_alpha2() {
    let response = test_app().oneshot(get("/api/countries/JP")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "name": "Japan",
            "alpha2": "JP",
            "alpha3": "JPN",
            "region": "Asia"
        })
    );
}

#[tokio::test]
async fn test_get_unknown_country_is_not_found() {
    let response = test_app().oneshot(get("/api/countries/XX")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({"reason": "not found"}));
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_returns_created_profile() {
    let response = test_app()
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "login": "yellowMonkey",
                "email": "monkey@banana.com",
                "password": "b4nana777",
                "countryCode": "NL",
                "isPublic": false,
                "phone": "+31612345678"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    // The password must never appear in the response, in any form
    assert!(!raw.contains("b4nana777"));
    assert!(!raw.contains("password"));

    let body: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        body,
        json!({
            "profile": {
                "login": "yellowMonkey",
                "email": "monkey@banana.com",
                "countryCode": "NL",
                "isPublic": false,
                "phone": "+31612345678"
            }
        })
    );
}

#[tokio::test]
async fn test_register_defaults_applied() {
    // isPublic and phone omitted: default true and empty string
    let response = test_app()
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "login": "quietPanda",
                "email": "panda@bamboo.com",
                "password": "bamb00",
                "countryCode": "JP"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["profile"]["isPublic"], json!(true));
    assert_eq!(body["profile"]["phone"], json!(""));
}

#[tokio::test]
async fn test_register_taken_email_conflicts() {
    let response = test_app()
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "login": "someoneElse",
                "email": TAKEN_EMAIL,
                "password": "abc123",
                "countryCode": "NL"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await,
        json!({"reason": "not uniq email"})
    );
}

#[tokio::test]
async fn test_register_empty_body_is_missing_data() {
    // All fields optional on the wire; the pipeline reports absence
    let response = test_app()
        .oneshot(post_json("/api/auth/register", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({"reason": "missing data"}));
}

#[tokio::test]
async fn test_register_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body.get("reason").is_some());
}
