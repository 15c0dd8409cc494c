//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! The storefront ships no scripts and serves every asset from `/static`, so
//! the content security policy stays fully locked down. HTTPS deployments
//! additionally get HSTS and `upgrade-insecure-requests`.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Base policy. Forms post back to the same origin; images may be inline SVG.
const CSP: &str = "default-src 'none'; \
                   script-src 'none'; \
                   style-src 'self'; \
                   font-src 'self'; \
                   img-src 'self' data:; \
                   connect-src 'self'; \
                   frame-src 'none'; \
                   object-src 'none'; \
                   base-uri 'self'; \
                   form-action 'self'; \
                   frame-ancestors 'none'";

const CSP_SECURE: &str = "default-src 'none'; \
                          script-src 'none'; \
                          style-src 'self'; \
                          font-src 'self'; \
                          img-src 'self' data:; \
                          connect-src 'self'; \
                          frame-src 'none'; \
                          object-src 'none'; \
                          base-uri 'self'; \
                          form-action 'self'; \
                          frame-ancestors 'none'; \
                          upgrade-insecure-requests";

/// Deny every powerful browser feature; the storefront uses none of them.
const PERMISSIONS_POLICY: &str = "accelerometer=(), autoplay=(), camera=(), \
                                  display-capture=(), encrypted-media=(), fullscreen=(), \
                                  geolocation=(), gyroscope=(), hid=(), magnetometer=(), \
                                  microphone=(), midi=(), payment=(), picture-in-picture=(), \
                                  publickey-credentials-get=(), screen-wake-lock=(), \
                                  serial=(), usb=(), xr-spatial-tracking=()";

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: no-referrer`
/// - `Content-Security-Policy`
/// - `Permissions-Policy`
/// - `Cache-Control: no-store, max-age=0` on pages (static assets keep theirs)
/// - `Cross-Origin-Opener-Policy` / `Cross-Origin-Resource-Policy: same-origin`
/// - `Strict-Transport-Security` when the base URL is HTTPS
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let is_static = request.uri().path().starts_with("/static/");
    let mut response = next.run(request).await;
    apply(response.headers_mut(), state.config().is_secure(), is_static);
    response
}

fn apply(headers: &mut HeaderMap, secure: bool, is_static: bool) {
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(
        CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(if secure { CSP_SECURE } else { CSP }),
    );
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(PERMISSIONS_POLICY),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );

    // Pages carry per-visitor basket and login state
    if !is_static {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    if secure {
        headers.insert(
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insecure_policy() {
        let mut headers = HeaderMap::new();
        apply(&mut headers, false, false);

        assert_eq!(headers.get(X_FRAME_OPTIONS).map(HeaderValue::as_bytes), Some(&b"DENY"[..]));
        assert!(headers.get(STRICT_TRANSPORT_SECURITY).is_none());
        let csp = headers
            .get(CONTENT_SECURITY_POLICY)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(csp.contains("form-action 'self'"));
        assert!(!csp.contains("upgrade-insecure-requests"));
        assert!(headers.get(CACHE_CONTROL).is_some());
    }

    #[test]
    fn test_secure_policy_adds_hsts() {
        let mut headers = HeaderMap::new();
        apply(&mut headers, true, true);

        assert!(headers.get(STRICT_TRANSPORT_SECURITY).is_some());
        assert!(headers.get(CACHE_CONTROL).is_none());
        let csp = headers
            .get(CONTENT_SECURITY_POLICY)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(csp.ends_with("upgrade-insecure-requests"));
    }
}
