//! Profile form handler.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireAuth;
use crate::models::CurrentUser;
use crate::providers::Providers;
use crate::services::{AuthError, AuthService, ProfileUpdate};
use crate::state::AppState;
use crate::views::{ProfileFormView, compose};

/// Save the profile form.
///
/// A rejected submission re-renders `/profile` with the entered values and
/// the error, status 400. A saved profile redirects back to `/profile`.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    mut providers: Providers,
    Form(form): Form<ProfileUpdate>,
) -> Result<Response> {
    let submitted = form.clone();

    match AuthService::new(state.users()).update_profile(user.id, form).await {
        Ok(updated) => {
            providers.auth.refresh(CurrentUser::from(&updated)).await?;
            add_breadcrumb("profile", "Profile saved", None);
            Ok(Redirect::to("/profile").into_response())
        }
        Err(AuthError::InvalidField { field, reason }) => {
            tracing::debug!(field, reason, "Profile rejected");
            let mut layout = compose("/profile", &state, &providers).await;
            layout.show_profile_error(
                ProfileFormView::from_submission(user.email.as_str(), &submitted),
                format!("{field} {reason}"),
            );
            Ok((StatusCode::BAD_REQUEST, layout).into_response())
        }
        Err(err) => Err(AppError::Auth(err)),
    }
}
