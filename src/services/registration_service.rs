//! Registration service - The user registration pipeline.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MAX_IMAGE_LENGTH;
use crate::domain::{NewUser, Password, Profile, RegisterUser};
use crate::errors::{AppError, AppResult};
use crate::infra::Storage;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Run the registration pipeline and persist the new user.
    ///
    /// Returns the public profile of the created user on success.
    async fn register(&self, request: RegisterUser) -> AppResult<Profile>;
}

/// Concrete implementation of RegistrationService
pub struct Registrar<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> Registrar<S> {
    /// Create new registration service instance
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: Storage> RegistrationService for Registrar<S> {
    /// The checks run in a fixed order and short-circuit on the first
    /// failure. Password policy runs last, only after the referential
    /// and uniqueness checks have passed.
    async fn register(&self, request: RegisterUser) -> AppResult<Profile> {
        // 1. Presence: the four mandatory fields must be non-empty
        if request.login.is_empty()
            || request.email.is_empty()
            || request.password.is_empty()
            || request.country_code.is_empty()
        {
            return Err(AppError::validation("missing data"));
        }

        // 2. Referential: countryCode must resolve to a known country
        if self
            .storage
            .countries()
            .find_by_alpha2(&request.country_code)
            .await?
            .is_none()
        {
            return Err(AppError::validation("no such country"));
        }

        // 3. Phone format: when given, the number must start with '+'.
        //    An empty phone bypasses the check.
        if !request.phone.is_empty() && !request.phone.starts_with('+') {
            return Err(AppError::validation("bad phone number"));
        }

        // 4. Image length cap
        if request.image.chars().count() > MAX_IMAGE_LENGTH {
            return Err(AppError::validation("too long image"));
        }

        // 5-6. Uniqueness (advisory; the unique indexes settle races
        //      at insert time)
        if self
            .storage
            .users()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("not uniq email"));
        }

        if self
            .storage
            .users()
            .find_by_login(&request.login)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("not uniq login"));
        }

        // 7. Password policy, then hash with a per-user random salt
        let password_hash = Password::new(&request.password)?.into_string();

        let user = self
            .storage
            .users()
            .insert(NewUser {
                login: request.login,
                email: request.email,
                password_hash,
                country_code: request.country_code,
                is_public: request.is_public,
                phone_number: request.phone,
                image: request.image,
            })
            .await?;

        tracing::info!(login = %user.login, "user registered");

        Ok(Profile::from(user))
    }
}
