//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub country_code: String,
    pub is_public: bool,
    pub phone_number: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Registration request body.
///
/// All fields are optional on the wire; absent strings default to
/// empty (the presence check turns those into `missing data`) and
/// `isPublic` defaults to true.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    /// Unique login name
    #[serde(default)]
    #[schema(example = "yellowMonkey")]
    pub login: String,
    /// Unique email address
    #[serde(default)]
    #[schema(example = "monkey@banana.com")]
    pub email: String,
    /// Plaintext password, validated and hashed before storage
    #[serde(default)]
    #[schema(example = "b4nana777")]
    pub password: String,
    /// alpha2 code of an existing country
    #[serde(default)]
    #[schema(example = "NL")]
    pub country_code: String,
    /// Profile visibility
    #[serde(default = "default_is_public")]
    #[schema(example = true)]
    pub is_public: bool,
    /// Phone number; when present it must start with '+'
    #[serde(default)]
    #[schema(example = "+31612345678")]
    pub phone: String,
    /// Avatar URI or encoded payload, at most 200 characters
    #[serde(default)]
    #[schema(example = "https://http.cat/images/100.jpg")]
    pub image: String,
}

fn default_is_public() -> bool {
    true
}

/// Insert-ready user record with the password already hashed.
///
/// Built by the registration service once the validation pipeline
/// has passed; repositories never see a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub email: String,
    pub password_hash: String,
    pub country_code: String,
    pub is_public: bool,
    pub phone_number: String,
    pub image: String,
}

/// Public-safe projection of a registered user.
///
/// Never carries the password or its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[schema(example = "yellowMonkey")]
    pub login: String,
    #[schema(example = "monkey@banana.com")]
    pub email: String,
    #[schema(example = "NL")]
    pub country_code: String,
    #[schema(example = true)]
    pub is_public: bool,
    #[schema(example = "+31612345678")]
    pub phone: String,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Self {
            login: user.login,
            email: user.email,
            country_code: user.country_code,
            is_public: user.is_public,
            phone: user.phone_number,
        }
    }
}
