//! Overlay flags and the redirects of their mutators.

#![allow(clippy::unwrap_used)]

use reqwest::{StatusCode, header::LOCATION};

use emporium_integration_tests::{
    TestServer, browser, browser_no_redirect, has_overlay, overlay_count,
};

#[tokio::test]
async fn test_open_and_close_each_overlay() {
    let server = TestServer::spawn().await;
    let client = browser();

    for overlay in ["basket", "login", "order-success"] {
        let html = server
            .post(&client, &format!("/overlays/{overlay}/open"), &[("return_to", "/")])
            .await;
        assert!(has_overlay(&html, overlay), "{overlay} should open");
        assert_eq!(overlay_count(&html), 1);

        let html = server
            .post(&client, &format!("/overlays/{overlay}/close"), &[("return_to", "/")])
            .await;
        assert!(!has_overlay(&html, overlay), "{overlay} should close");
        assert_eq!(overlay_count(&html), 0);
    }
}

#[tokio::test]
async fn test_overlays_are_independent() {
    let server = TestServer::spawn().await;
    let client = browser();

    server
        .post(&client, "/overlays/basket/open", &[("return_to", "/")])
        .await;
    let html = server
        .post(&client, "/overlays/login/open", &[("return_to", "/profile")])
        .await;

    assert!(has_overlay(&html, "basket"));
    assert!(has_overlay(&html, "login"));
    assert!(has_overlay(&html, "profile"));
    assert_eq!(overlay_count(&html), 3);
}

#[tokio::test]
async fn test_mutators_redirect_with_see_other() {
    let server = TestServer::spawn().await;
    let client = browser_no_redirect();

    let response = client
        .post(server.url("/overlays/basket/open"))
        .form(&[("return_to", "/orders")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/orders");

    let response = client
        .post(server.url("/overlays/basket/close"))
        .form(&[("return_to", "//evil.example/")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn test_view_orders_closes_and_navigates() {
    let server = TestServer::spawn().await;
    let client = browser_no_redirect();

    client
        .post(server.url("/overlays/order-success/open"))
        .form(&[("return_to", "/")])
        .send()
        .await
        .unwrap();
    let (_, html) = server.page(&client, "/").await;
    assert!(has_overlay(&html, "order-success"));

    let response = client
        .post(server.url("/overlays/order-success/view-orders"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/orders");

    let (_, html) = server.page(&client, "/orders").await;
    assert!(!has_overlay(&html, "order-success"));
}

#[tokio::test]
async fn test_unknown_and_path_driven_overlays_rejected() {
    let server = TestServer::spawn().await;
    let client = browser_no_redirect();

    for overlay in ["profile", "wishlist"] {
        let response = client
            .post(server.url(&format!("/overlays/{overlay}/open")))
            .form(&[("return_to", "/")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{overlay}");
    }
}

#[tokio::test]
async fn test_flags_are_per_visitor() {
    let server = TestServer::spawn().await;
    let alice = browser();
    let bob = browser();

    server
        .post(&alice, "/overlays/basket/open", &[("return_to", "/")])
        .await;

    let (_, html) = server.page(&bob, "/").await;
    assert_eq!(overlay_count(&html), 0);
}
