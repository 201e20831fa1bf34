use serde_json::Value;

use crate::helpers::{TestApp, TEST_PARTNER_ID};

#[tokio::test]
async fn should_publish_the_public_key_set() {
    let app = TestApp::new().await;

    let response = app.get_jwks().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let keys = body["keys"].as_array().expect("keys array");
    assert_eq!(keys.len(), 1);

    let jwk = keys[0].as_object().expect("jwk object");
    assert_eq!(jwk["kty"], "EC");
    assert_eq!(jwk["crv"], "P-256");
    assert_eq!(jwk["use"], "sig");
    assert_eq!(jwk["alg"], "ES256");
    assert_eq!(jwk["kid"], TEST_PARTNER_ID);
    assert!(jwk["x"].is_string());
    assert!(jwk["y"].is_string());
}

#[tokio::test]
async fn should_never_contain_a_private_component() {
    let app = TestApp::new().await;

    let body: Value = app.get_jwks().await.json().await.unwrap();
    for key in body["keys"].as_array().expect("keys array") {
        let fields = key.as_object().expect("jwk object");
        assert!(!fields.contains_key("d"));
        // Public EC JWK fields only.
        for name in fields.keys() {
            assert!(
                matches!(name.as_str(), "kty" | "crv" | "x" | "y" | "use" | "alg" | "kid"),
                "unexpected JWK field {name}"
            );
        }
    }
}

#[tokio::test]
async fn should_be_cacheable_for_a_day() {
    let app = TestApp::new().await;

    let response = app.get_jwks().await;
    let cache_control = response
        .headers()
        .get("Cache-Control")
        .expect("Cache-Control header")
        .to_str()
        .unwrap();
    assert_eq!(cache_control, "public, max-age=86400");
}
