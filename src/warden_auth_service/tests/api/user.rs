use serde_json::json;

use crate::helpers::{TestApp, error_message, set_cookie_value};

#[tokio::test]
async fn current_user_is_returned_for_session() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app.get_user(&session.cookie_header()).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert_eq!(body["email"], "a@x.com");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn missing_access_cookie_is_renewed_from_refresh_cookie() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app.get_user(&session.refresh_cookie_header()).await;

    assert_eq!(response.status(), 200);
    assert!(set_cookie_value(&response, "access_token").is_some());
}

#[tokio::test]
async fn current_user_without_session_is_401() {
    let app = TestApp::new().await;

    let response = app.get_user("").await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn patch_changes_email_and_password() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app
        .patch_user(
            &session.cookie_header(),
            &json!({ "email": "b@x.com", "password": "pw2" }),
        )
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert_eq!(body["email"], "b@x.com");
    assert_eq!(app.post_login("a@x.com", "pw1").await.status(), 401);
    assert_eq!(app.post_login("b@x.com", "pw2").await.status(), 200);
}

#[tokio::test]
async fn patch_without_password_keeps_it() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app
        .patch_user(
            &session.cookie_header(),
            &json!({ "email": "b@x.com", "password": "" }),
        )
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(app.post_login("b@x.com", "pw1").await.status(), 200);
}

#[tokio::test]
async fn patch_onto_taken_email_is_409() {
    let app = TestApp::new().await;
    assert_eq!(app.post_register("b@x.com", "pw1").await.status(), 200);
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app
        .patch_user(&session.cookie_header(), &json!({ "email": "b@x.com" }))
        .await;

    assert_eq!(response.status(), 409);
    assert_eq!(error_message(response).await, "User already exists");
}

#[tokio::test]
async fn patch_with_invalid_email_is_400() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app
        .patch_user(&session.cookie_header(), &json!({ "email": "nope" }))
        .await;

    assert_eq!(response.status(), 400);
}
