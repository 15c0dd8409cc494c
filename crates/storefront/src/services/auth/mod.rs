//! Authentication service.
//!
//! Provides password registration and login against the in-memory user
//! repository, plus profile updates for the logged-in user.

mod error;

pub use error::AuthError;

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::NaiveDate;
use serde::Deserialize;

use emporium_core::{Email, UserId};

use crate::db::{RepositoryError, UserRepository};
use crate::models::{Profile, User};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length accepted for any name or profile text field.
const MAX_FIELD_LENGTH: usize = 200;

/// Hash verified against when the email is unknown.
static DUMMY_PASSWORD_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("emporium-unknown-account").ok());

/// Authentication service.
///
/// Handles user registration, login, and profile updates.
pub struct AuthService<'a> {
    users: &'a UserRepository,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a UserRepository) -> Self {
        Self { users }
    }

    // =========================================================================
    // Password Authentication
    // =========================================================================

    /// Register a new user with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::InvalidField` if a name is blank.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register_with_password(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let first_name = required(first_name, "First name")?;
        let last_name = required(last_name, "Last name")?;

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create_with_password(&email, &password_hash, &first_name, &last_name)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let Some((user, password_hash)) = self.users.get_password_hash(&email).await else {
            // Unknown emails cost the same Argon2 work as known ones
            if let Some(dummy) = DUMMY_PASSWORD_HASH.as_deref() {
                let _ = verify_password(password, dummy);
            }
            return Err(AuthError::InvalidCredentials);
        };

        verify_password(password, &password_hash)?;

        Ok(user)
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the account no longer exists.
    pub async fn get_user(&self, id: UserId) -> Result<User, AuthError> {
        self.users.get_by_id(id).await.ok_or(AuthError::UserNotFound)
    }

    /// Validate and save a profile form.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidField` for the first invalid field and
    /// `AuthError::UserNotFound` if the account no longer exists.
    pub async fn update_profile(
        &self,
        id: UserId,
        update: ProfileUpdate,
    ) -> Result<User, AuthError> {
        let (first_name, last_name, profile) = update.validate()?;
        self.users
            .update_profile(id, &first_name, &last_name, profile)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => AuthError::UserNotFound,
                other => AuthError::Repository(other),
            })
    }
}

/// Profile form submission.
///
/// Every field is required except `address_line2` and `landmark`. Missing
/// form fields deserialize as blank and are reported by [`Self::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub country: String,
    pub contact_number: String,
    pub pincode: String,
    pub address_line1: String,
    pub address_line2: String,
    pub landmark: String,
    pub city: String,
    pub state: String,
}

impl ProfileUpdate {
    /// Check required fields and parse the date of birth.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidField` naming the first offending field.
    pub fn validate(self) -> Result<(String, String, Profile), AuthError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;

        let date_of_birth = NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d")
            .map_err(|_| AuthError::InvalidField {
                field: "Date of birth",
                reason: "must be a date (YYYY-MM-DD)",
            })?;
        if date_of_birth > chrono::Utc::now().date_naive() {
            return Err(AuthError::InvalidField {
                field: "Date of birth",
                reason: "cannot be in the future",
            });
        }

        let profile = Profile {
            date_of_birth: Some(date_of_birth),
            country: Some(required(&self.country, "Country")?),
            contact_number: Some(required(&self.contact_number, "Contact number")?),
            pincode: Some(required(&self.pincode, "Pincode")?),
            address_line1: Some(required(&self.address_line1, "Address line 1")?),
            address_line2: optional(&self.address_line2, "Address line 2")?,
            landmark: optional(&self.landmark, "Landmark")?,
            city: Some(required(&self.city, "City")?),
            state: Some(required(&self.state, "State")?),
        };

        Ok((first_name, last_name, profile))
    }
}

/// Trim a required text field.
fn required(value: &str, field: &'static str) -> Result<String, AuthError> {
    optional(value, field)?.ok_or(AuthError::InvalidField {
        field,
        reason: "is required",
    })
}

/// Trim an optional text field; blank becomes `None`.
fn optional(value: &str, field: &'static str) -> Result<Option<String>, AuthError> {
    let trimmed = value.trim();
    if trimmed.len() > MAX_FIELD_LENGTH {
        return Err(AuthError::InvalidField {
            field,
            reason: "is too long",
        });
    }
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
