//! Page composition over HTTP: the grid, the routed main region and the
//! path-driven profile overlay.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;

use emporium_integration_tests::{TestServer, browser, card_count, has_overlay, overlay_count};

const SINGLE_MUG: &str = r#"[
    {"id": "p1", "name": "Mug", "description": "Holds coffee.", "price": "9.00"}
]"#;

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::spawn().await;
    let client = browser();

    let (status, body) = server.page(&client, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = server.page(&client, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_fails_on_empty_catalog() {
    let server = TestServer::spawn_with_json("[]").await;
    let (status, _) = server.page(&browser(), "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_single_product_grid_and_basket_control() {
    let server = TestServer::spawn_with_json(SINGLE_MUG).await;
    let client = browser();

    let (status, html) = server.page(&client, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card_count(&html), 1);
    assert!(html.contains("Mug"));
    assert!(html.contains("$9.00"));
    assert!(html.contains("data-control=\"basket\""));
    assert_eq!(overlay_count(&html), 0);

    let html = server
        .post(&client, "/overlays/basket/open", &[("return_to", "/")])
        .await;
    assert!(has_overlay(&html, "basket"));
    assert_eq!(card_count(&html), 1);
}

#[tokio::test]
async fn test_builtin_catalog_renders_every_product() {
    let server = TestServer::spawn().await;
    let (_, html) = server.page(&browser(), "/").await;
    assert_eq!(card_count(&html), server.state.catalog().len());
}

#[tokio::test]
async fn test_profile_path_adds_one_overlay() {
    let server = TestServer::spawn().await;
    let client = browser();

    let (_, home) = server.page(&client, "/").await;
    let (status, profile) = server.page(&client, "/profile").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(overlay_count(&profile), overlay_count(&home) + 1);
    assert!(has_overlay(&profile, "profile"));
    assert!(profile.contains("Log in to view your profile"));
    // The grid stays underneath
    assert_eq!(card_count(&profile), card_count(&home));
}

#[tokio::test]
async fn test_unknown_path_is_404_with_layout() {
    let server = TestServer::spawn().await;
    let (status, html) = server.page(&browser(), "/definitely/not/here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(card_count(&html), 0);
    assert!(html.contains("data-control=\"basket\""));
}

#[tokio::test]
async fn test_orders_page_logged_out() {
    let server = TestServer::spawn().await;
    let (status, html) = server.page(&browser(), "/orders").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Log in to see your orders"));
    assert_eq!(card_count(&html), 0);
}

#[tokio::test]
async fn test_currency_selection() {
    let server = TestServer::spawn_with_json(SINGLE_MUG).await;
    let client = browser();

    let html = server
        .post(&client, "/currency", &[("currency", "INR"), ("return_to", "/")])
        .await;
    assert!(html.contains("₹747.00"));
    assert!(!html.contains("$9.00"));

    let response = client
        .post(server.url("/currency"))
        .form(&[("currency", "XYZ")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_assets_and_headers() {
    let server = TestServer::spawn().await;
    let client = browser();

    let response = client
        .get(server.url("/static/images/products/mug.svg"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("cache-control").is_none());

    let response = client.get(server.url("/")).send().await.unwrap();
    let headers = response.headers();
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.get("x-request-id").is_some());
    assert!(headers.get("content-security-policy").is_some());
    assert!(headers.get("strict-transport-security").is_none());
}
