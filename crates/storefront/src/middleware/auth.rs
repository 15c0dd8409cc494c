//! Identity extractors.
//!
//! Both read the session-stored [`CurrentUser`] written by the auth
//! provider; neither touches the user repository.

use axum::{
    extract::{FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Extractor for handlers that need a logged-in user.
///
/// Logged-out visitors are sent to `/profile`, whose overlay carries the
/// login prompt.
///
/// ```rust,ignore
/// async fn save(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Saved for {}", user.first_name)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Why [`RequireAuth`] refused a request.
pub enum AuthRejection {
    LoggedOut,
    /// The router was built without the session layer.
    MissingSession,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::LoggedOut => Redirect::to("/profile").into_response(),
            Self::MissingSession => {
                tracing::error!("Session layer missing");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

async fn session_user(session: &Session) -> Option<CurrentUser> {
    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::MissingSession)?;

        session_user(session)
            .await
            .map(Self)
            .ok_or(AuthRejection::LoggedOut)
    }
}

/// Extractor for the user, if any. Never rejects.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => session_user(session).await,
            None => None,
        };
        Ok(Self(user))
    }
}

/// Record the logged-in user's id on the request span.
pub async fn user_context_middleware(
    OptionalAuth(user): OptionalAuth,
    request: Request,
    next: Next,
) -> Response {
    if let Some(user) = &user {
        tracing::Span::current().record("user_id", user.id.as_u64());
    }
    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::header::LOCATION, routing::get};
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use super::*;

    fn app() -> Router {
        Router::new()
            .route(
                "/secret",
                get(|RequireAuth(user): RequireAuth| async move { user.first_name }),
            )
            .route(
                "/maybe",
                get(|OptionalAuth(user): OptionalAuth| async move {
                    user.map_or_else(|| "nobody".to_string(), |u| u.first_name)
                }),
            )
            .layer(SessionManagerLayer::new(MemoryStore::default()))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_require_auth_redirects_logged_out() {
        let response = app().oneshot(get_request("/secret")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/profile");
    }

    #[tokio::test]
    async fn test_optional_auth_logged_out() {
        let response = app().oneshot(get_request("/maybe")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"nobody");
    }

    #[tokio::test]
    async fn test_missing_session_layer() {
        let app = Router::new().route("/secret", get(|_: RequireAuth| async { "" }));
        let response = app.oneshot(get_request("/secret")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
