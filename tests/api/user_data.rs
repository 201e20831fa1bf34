use serde_json::Value;

use crate::helpers::{get_random_sub, TestApp};

#[tokio::test]
async fn should_return_401_without_authorization_header() {
    let app = TestApp::new().await;

    let response = app.post_user_data(None).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn should_return_401_for_garbage_token() {
    let app = TestApp::new().await;

    let response = app.post_user_data(Some("not.a.jwt")).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn should_return_demo_data_for_valid_session() {
    let app = TestApp::new().await;
    let token = app
        .token_service
        .issue_session("0xabc")
        .await
        .expect("Failed to issue session");

    let response = app.post_user_data(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["response"]["id"], "did:ethr:0xabc");
    assert_eq!(body["response"]["total_balance"], "21");

    let jwt = body["jwt"].as_str().expect("jwt is a string");
    // Compact JWS: three dot-separated segments.
    assert_eq!(jwt.split('.').count(), 3);
}

#[tokio::test]
async fn should_accept_bearer_prefixed_session_token() {
    let app = TestApp::new().await;
    let sub = get_random_sub();
    let token = app
        .token_service
        .issue_session(&sub)
        .await
        .expect("Failed to issue session");

    let response = app.post_user_data(Some(&format!("Bearer {token}"))).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["response"]["id"], format!("did:ethr:{sub}"));
}

#[tokio::test]
async fn should_return_400_when_subject_is_missing() {
    let app = TestApp::new().await;
    let token = app
        .token_service
        .issue_session("")
        .await
        .expect("Failed to issue session");

    let response = app.post_user_data(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "user Id not found");
}
