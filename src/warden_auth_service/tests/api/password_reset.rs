use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn reset_round_trip_replaces_password() {
    let app = TestApp::new().await;
    app.post_register("a@x.com", "pw1").await;

    let response = app.post_request_password_reset("a@x.com").await;
    assert_eq!(response.status(), 200);
    let token = app.last_reset_token().await;

    let response = app
        .post_confirm_password_reset(token.as_str(), "newpw")
        .await;
    assert_eq!(response.status(), 200);

    assert_eq!(app.post_login("a@x.com", "newpw").await.status(), 200);
    assert_eq!(app.post_login("a@x.com", "pw1").await.status(), 401);
}

#[tokio::test]
async fn reset_token_is_single_use() {
    let app = TestApp::new().await;
    app.post_register("a@x.com", "pw1").await;
    app.post_request_password_reset("a@x.com").await;
    let token = app.last_reset_token().await;
    app.post_confirm_password_reset(token.as_str(), "newpw")
        .await;

    let response = app
        .post_confirm_password_reset(token.as_str(), "other")
        .await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn unknown_email_gets_generic_error() {
    let app = TestApp::new().await;

    let response = app.post_request_password_reset("nobody@x.com").await;

    assert_eq!(response.status(), 400);
    assert_eq!(error_message(response).await, "Unable to process request");
}

#[tokio::test]
async fn unknown_reset_token_is_401() {
    let app = TestApp::new().await;

    let response = app
        .post_confirm_password_reset("no-such-token", "newpw")
        .await;

    assert_eq!(response.status(), 401);
}
