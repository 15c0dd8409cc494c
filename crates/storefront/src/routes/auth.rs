//! Authentication route handlers.
//!
//! Login and registration are posted from the login overlay. On failure the
//! overlay stays open and shows the error on the next render; on success the
//! identity is stored and the overlay closes.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::models::{CurrentUser, User};
use crate::providers::Providers;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

use super::safe_return_to;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub return_to: Option<String>,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub return_to: Option<String>,
}

/// Store the outcome of a login or registration attempt.
///
/// Server-side failures propagate; anything the visitor can fix is shown in
/// the login overlay.
async fn finish_attempt(
    providers: &mut Providers,
    outcome: std::result::Result<User, AuthError>,
) -> Result<()> {
    match outcome {
        Ok(user) => {
            providers.auth.login(CurrentUser::from(&user)).await?;
            set_sentry_user(&user.id, Some(user.email.as_str()));
            add_breadcrumb("auth", "Logged in", None);
            Ok(())
        }
        Err(err @ (AuthError::Repository(_) | AuthError::PasswordHash)) => {
            Err(AppError::Auth(err))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Login attempt rejected");
            providers.auth.set_login_open(true).await?;
            providers.auth.set_error(err.user_message()).await?;
            Ok(())
        }
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    mut providers: Providers,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let outcome = AuthService::new(state.users())
        .login_with_password(&form.email, &form.password)
        .await;
    finish_attempt(&mut providers, outcome).await?;

    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// Handle registration form submission.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    mut providers: Providers,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    let outcome = AuthService::new(state.users())
        .register_with_password(&form.email, &form.password, &form.first_name, &form.last_name)
        .await;
    finish_attempt(&mut providers, outcome).await?;

    Ok(Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// Handle logout.
#[instrument(skip_all)]
pub async fn logout(mut providers: Providers) -> Result<Redirect> {
    providers.auth.logout().await?;
    clear_sentry_user();
    add_breadcrumb("auth", "Logged out", None);
    Ok(Redirect::to("/"))
}
