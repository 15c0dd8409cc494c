//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check
//! GET  /static/*               - Static assets
//!
//! # Pages (one layout, page chosen by path)
//! GET  /                       - Product grid
//! GET  /profile                - Product grid + profile overlay
//! GET  /orders                 - Order history
//! GET  /*                      - Empty main region, 404
//!
//! # Overlays
//! POST /overlays/{overlay}/open           - basket | login | order-success
//! POST /overlays/{overlay}/close          - basket | login | order-success
//! POST /overlays/order-success/view-orders - Close, then go to /orders
//!
//! # Basket
//! POST /cart/add               - Add a product (quantity defaults to 1)
//! POST /cart/update            - Set a line's quantity (0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the basket
//! POST /cart/checkout          - Place one order per line
//!
//! # Auth
//! POST /auth/login             - Login action
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Account
//! POST /profile                - Save profile (requires auth)
//! POST /currency               - Select display currency
//! ```
//!
//! Every POST answers `303 See Other`, usually back to the form's
//! `return_to` path.

pub mod auth;
pub mod cart;
pub mod currency;
pub mod health;
pub mod overlays;
pub mod pages;
pub mod profile;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::config::StorefrontConfig;
use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes(config: &StorefrontConfig) -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .layer(auth_rate_limiter(config.trust_proxy_headers))
        .route("/logout", post(auth::logout))
}

/// Create the overlay routes router.
pub fn overlay_routes() -> Router<AppState> {
    Router::new()
        .route("/order-success/view-orders", post(overlays::view_orders))
        .route("/{overlay}/open", post(overlays::open))
        .route("/{overlay}/close", post(overlays::close))
}

/// Create the cart routes router.
pub fn cart_routes(config: &StorefrontConfig) -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
        .layer(api_rate_limiter(config.trust_proxy_headers))
}

/// Create all routes for the storefront.
pub fn routes(config: &StorefrontConfig) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        // Single layout; the page is resolved from the path
        .route("/", get(pages::page))
        .route("/{*path}", get(pages::page))
        .route("/profile", get(pages::page).post(profile::update))
        .route("/currency", post(currency::select))
        .nest("/overlays", overlay_routes())
        .nest("/cart", cart_routes(config))
        .nest("/auth", auth_routes(config))
}

/// Form with only a return path.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnForm {
    pub return_to: Option<String>,
}

/// Sanitize a form's `return_to` into a local path.
///
/// Anything that is not an absolute local path (including protocol-relative
/// `//host` and backslash tricks) falls back to `/`.
#[must_use]
pub fn safe_return_to(return_to: Option<&str>) -> String {
    match return_to.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_to() {
        assert_eq!(safe_return_to(Some("/orders")), "/orders");
        assert_eq!(safe_return_to(Some("/profile?x=1")), "/profile?x=1");
        assert_eq!(safe_return_to(None), "/");
        assert_eq!(safe_return_to(Some("")), "/");
        assert_eq!(safe_return_to(Some("https://evil.example")), "/");
        assert_eq!(safe_return_to(Some("//evil.example")), "/");
        assert_eq!(safe_return_to(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_to(Some("/a\r\nSet-Cookie: x")), "/");
    }
}
