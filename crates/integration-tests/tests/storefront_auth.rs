//! End-to-end login/logout tests.
//!
//! These tests require a running storefront server
//! (cargo run -p luvyn-storefront). Run with:
//! cargo test -p luvyn-integration-tests -- --ignored

use luvyn_integration_tests::{base_url, client};

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_login_logout_flow() {
    let client = client();
    let base = base_url();

    let resp = client
        .post(format!("{base}/login"))
        .form(&[("email", "user@example.com"), ("password", "password")])
        .send()
        .await
        .expect("Failed to log in");
    assert!(resp.status().is_redirection());

    let body = client
        .get(&base)
        .send()
        .await
        .expect("Failed to load home")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("User Luvyn"));

    let resp = client
        .post(format!("{base}/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert!(resp.status().is_redirection());

    let body = client
        .get(&base)
        .send()
        .await
        .expect("Failed to load home")
        .text()
        .await
        .expect("Failed to read body");
    assert!(!body.contains("User Luvyn"));

    // Logout is idempotent
    let resp = client
        .post(format!("{base}/logout"))
        .send()
        .await
        .expect("Failed to log out twice");
    assert!(resp.status().is_redirection());
}

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_login_wrong_password() {
    let client = client();
    let base = base_url();

    let resp = client
        .post(format!("{base}/login"))
        .form(&[("email", "user@example.com"), ("password", "wrong")])
        .send()
        .await
        .expect("Failed to send login");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(location.starts_with("/login?error="));

    let body = client
        .get(&base)
        .send()
        .await
        .expect("Failed to load home")
        .text()
        .await
        .expect("Failed to read body");
    assert!(!body.contains("User Luvyn"));
}

#[tokio::test]
#[ignore = "requires a running storefront server"]
async fn test_register_does_not_create_account() {
    let client = client();
    let base = base_url();

    let resp = client
        .post(format!("{base}/register"))
        .form(&[
            ("name", "Someone New"),
            ("email", "new@example.com"),
            ("password", "longenough"),
            ("password_confirm", "longenough"),
        ])
        .send()
        .await
        .expect("Failed to register");
    assert!(resp.status().is_redirection());

    // The "new account" cannot log in - nothing was persisted
    let resp = client
        .post(format!("{base}/login"))
        .form(&[("email", "new@example.com"), ("password", "longenough")])
        .send()
        .await
        .expect("Failed to send login");
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(location.starts_with("/login?error="));
}
