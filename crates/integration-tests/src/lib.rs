//! Integration tests for the Emporium storefront.
//!
//! Each test spawns the real router on an ephemeral port and drives it over
//! HTTP with a cookie-keeping `reqwest` client, the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p emporium-integration-tests
//! ```

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::Client;
use tokio::task::JoinHandle;

use emporium_storefront::catalog::Catalog;
use emporium_storefront::config::StorefrontConfig;
use emporium_storefront::state::AppState;

/// A storefront served on `127.0.0.1:<ephemeral>` for one test.
pub struct TestServer {
    pub base_url: String,
    pub state: AppState,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the built-in catalog.
    pub async fn spawn() -> Self {
        Self::spawn_with(Catalog::builtin().expect("built-in catalog is valid")).await
    }

    /// Serve a catalog given as JSON.
    pub async fn spawn_with_json(json: &str) -> Self {
        Self::spawn_with(Catalog::from_json(json).expect("test catalog is valid")).await
    }

    pub async fn spawn_with(catalog: Catalog) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let config = StorefrontConfig {
            port: addr.port(),
            base_url: format!("http://{addr}"),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static")),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config, catalog);
        let app = emporium_storefront::router(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a page and return its status and body.
    pub async fn page(&self, client: &Client, path: &str) -> (reqwest::StatusCode, String) {
        let response = client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request");
        let status = response.status();
        (status, response.text().await.expect("response body"))
    }

    /// POST a form and return the final page body (redirects followed).
    pub async fn post(&self, client: &Client, path: &str, form: &[(&str, &str)]) -> String {
        client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request")
            .text()
            .await
            .expect("response body")
    }

    /// Register a fresh account; the client ends up logged in.
    pub async fn register(&self, client: &Client, email: &str, first_name: &str) -> String {
        self.post(
            client,
            "/auth/register",
            &[
                ("email", email),
                ("password", "correct horse battery"),
                ("first_name", first_name),
                ("last_name", "Tester"),
                ("return_to", "/"),
            ],
        )
        .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A browser-like client: keeps cookies and follows redirects.
#[must_use]
pub fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A cookie-keeping client that reports redirects instead of following them.
#[must_use]
pub fn browser_no_redirect() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Number of overlays mounted in a rendered page.
#[must_use]
pub fn overlay_count(html: &str) -> usize {
    html.matches("data-overlay=").count()
}

/// Whether a specific overlay is mounted.
#[must_use]
pub fn has_overlay(html: &str, overlay: &str) -> bool {
    html.contains(&format!("data-overlay=\"{overlay}\""))
}

/// Number of product cards in a rendered page.
#[must_use]
pub fn card_count(html: &str) -> usize {
    html.matches("data-product-id=").count()
}
