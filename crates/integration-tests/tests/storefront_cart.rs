//! End-to-end cart flow tests.
//!
//! These tests require a freshly started storefront server
//! (cargo run -p luvyn-storefront). Run with:
//! cargo test -p luvyn-integration-tests -- --ignored

use luvyn_integration_tests::{base_url, client};

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_health() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_catalog_lists_demo_products() {
    let resp = client()
        .get(base_url())
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), 200);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("Lampu Meja Canggih"));
    assert!(body.contains("Kipas Angin Portable Mini"));
    assert!(body.contains("Rp 45.000"));
}

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_add_to_cart_shows_line_and_totals() {
    let client = client();
    let base = base_url();

    let resp = client
        .post(format!("{base}/cart/add/4"))
        .send()
        .await
        .expect("Failed to add to cart");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base}/cart"))
        .send()
        .await
        .expect("Failed to load cart")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("Kipas Angin Portable Mini"));
    assert!(body.contains("1 item(s)"));
    assert!(body.contains("Rp 45.000"));
}

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_adding_same_product_twice_merges_lines() {
    let client = client();
    let base = base_url();

    for _ in 0..2 {
        client
            .post(format!("{base}/cart/add/4"))
            .send()
            .await
            .expect("Failed to add to cart");
    }

    let body = client
        .get(format!("{base}/cart"))
        .send()
        .await
        .expect("Failed to load cart")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("2 item(s)"));
    assert!(body.contains("Rp 90.000"));
    // One line, not two: only a single remove form for the product
    assert_eq!(body.matches("/cart/remove/").count(), 1);
}

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_add_unknown_product_redirects_home() {
    let resp = client()
        .post(format!("{}/cart/add/999", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(location.starts_with("/?error="));
}

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_update_to_zero_empties_cart() {
    let client = client();
    let base = base_url();

    client
        .post(format!("{base}/cart/add/1"))
        .send()
        .await
        .expect("Failed to add to cart");

    // The first line in a fresh session cart has id 1
    let resp = client
        .post(format!("{base}/cart/update/1"))
        .form(&[("quantity", "0")])
        .send()
        .await
        .expect("Failed to update cart");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base}/cart"))
        .send()
        .await
        .expect("Failed to load cart")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Your cart is empty"));
}
